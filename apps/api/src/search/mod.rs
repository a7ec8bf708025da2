// Talent search: storage-side filters plus relevance rescoring of the results.

pub mod filters;
pub mod handlers;
