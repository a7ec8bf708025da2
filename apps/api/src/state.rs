use std::sync::Arc;

use crate::config::Config;
use crate::matching::keyword_scorer::RelevanceScorer;
use crate::repository::{
    ApplicationRepository, CandidateRepository, JobRepository, TalentRepository,
};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobRepository>,
    pub talents: Arc<dyn TalentRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub candidates: Arc<dyn CandidateRepository>,
    /// Pluggable search rescoring. Default: KeywordRelevanceScorer.
    pub relevance: Arc<dyn RelevanceScorer>,
    pub config: Config,
}

impl AppState {
    /// Wires every repository to the same backing store.
    pub fn from_store<S>(store: Arc<S>, relevance: Arc<dyn RelevanceScorer>, config: Config) -> Self
    where
        S: JobRepository + TalentRepository + ApplicationRepository + CandidateRepository + 'static,
    {
        AppState {
            jobs: store.clone(),
            talents: store.clone(),
            applications: store.clone(),
            candidates: store,
            relevance,
            config,
        }
    }
}
