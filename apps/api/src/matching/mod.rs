// Matching core: profile ↔ job scoring and keyword relevance for talent search.
// Pure, synchronous, no I/O. Handlers fetch through repositories, then call in here.

pub mod handlers;
pub mod job_matcher;
pub mod keyword_scorer;
pub mod models;
pub mod overlap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Invalid match input: {0}")]
    InvalidInput(String),
}
