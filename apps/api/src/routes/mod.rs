pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Talent-facing
        .route("/api/talent/jobs/matches", get(matching::handle_job_matches))
        .route("/api/talent/search", post(search::handle_search))
        // Hiring-manager-facing
        .route(
            "/api/hiring/talent/matches",
            get(matching::handle_talent_matches),
        )
        .with_state(state)
}
