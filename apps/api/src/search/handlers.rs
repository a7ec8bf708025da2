use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::keyword_scorer::sort_by_match_score;
use crate::matching::models::CandidateSearchResult;
use crate::search::filters::SearchFilters;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(rename = "useAI", default = "default_use_ai")]
    pub use_ai: bool,
    #[serde(default)]
    pub filters: SearchFilters,
}

fn default_use_ai() -> bool {
    true
}

/// POST /api/talent/search
///
/// Filters candidates in storage, rescores them against `query` when `useAI` is set,
/// and returns them highest score first.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<CandidateSearchResult>>, AppError> {
    let mut results: Vec<CandidateSearchResult> = state
        .candidates
        .search(&request.filters)
        .await?
        .into_iter()
        .map(CandidateSearchResult::from)
        .collect();

    let query = request.query.as_deref().map(str::trim).unwrap_or_default();
    if request.use_ai && !query.is_empty() {
        results = state.relevance.rescore(results, query);
        debug!(
            "Rescored {} candidates for {query:?} with {} scorer",
            results.len(),
            state.relevance.backend()
        );
    }

    sort_by_match_score(&mut results);
    Ok(Json(results))
}
