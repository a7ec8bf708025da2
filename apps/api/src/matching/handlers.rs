//! Axum route handlers for job ↔ talent matching.

use std::collections::{HashMap, HashSet};

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::job_matcher::{
    find_matching_candidates_for_job, find_matching_jobs_for_candidate,
};
use crate::matching::models::{CandidateProfile, JobPosting, MatchScore, ScoredJob};
use crate::models::talent::TalentProfileRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchesQuery {
    pub talent_id: Option<Uuid>,
    pub limit: Option<usize>,
    pub min_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentMatchesQuery {
    pub job_id: Option<Uuid>,
    pub limit: Option<usize>,
    pub min_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse<T> {
    pub matches: Vec<T>,
    pub count: usize,
}

impl<T> From<Vec<T>> for MatchesResponse<T> {
    fn from(matches: Vec<T>) -> Self {
        let count = matches.len();
        MatchesResponse { matches, count }
    }
}

/// Talent as shown to a hiring manager: no contact details.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedTalent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<i32>,
    pub location: String,
    pub german_level: Option<String>,
    pub education: Option<String>,
    pub match_score: MatchScore,
}

impl SanitizedTalent {
    fn new(row: &TalentProfileRow, match_score: MatchScore) -> Self {
        SanitizedTalent {
            id: row.id,
            user_id: row.user_id,
            full_name: row.full_name.clone(),
            title: row.title.clone(),
            skills: row.skills.clone().unwrap_or_default(),
            experience: row.experience,
            location: row.display_location(),
            german_level: row.german_level.clone(),
            education: row.education.clone(),
            match_score,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/talent/jobs/matches?talentId=&limit=&minScore=
///
/// Active jobs ranked for one talent, excluding jobs they already applied to.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Query(params): Query<JobMatchesQuery>,
) -> Result<Json<MatchesResponse<ScoredJob>>, AppError> {
    let talent_id = params
        .talent_id
        .ok_or_else(|| AppError::Validation("Talent ID is required".to_string()))?;
    let limit = params.limit.unwrap_or(state.config.match_default_limit);
    let min_score = params
        .min_score
        .unwrap_or(state.config.match_default_min_score);

    let profile = state
        .talents
        .find_by_user_id(talent_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Talent profile {talent_id} not found")))?
        .to_candidate_profile();

    let jobs: Vec<JobPosting> = state
        .jobs
        .list_active_jobs()
        .await?
        .into_iter()
        .map(JobPosting::from)
        .collect();

    let applied: HashSet<String> = state
        .applications
        .applied_job_ids(talent_id)
        .await?
        .into_iter()
        .map(|id| id.to_string())
        .collect();

    let matches = find_matching_jobs_for_candidate(&profile, &jobs, &applied, limit, min_score)?;
    debug!(
        "Job matches for talent {talent_id}: {} of {} active jobs ({} already applied)",
        matches.len(),
        jobs.len(),
        applied.len()
    );

    Ok(Json(matches.into()))
}

/// GET /api/hiring/talent/matches?jobId=&limit=&minScore=
///
/// Talents ranked for one job, excluding talents who already applied.
pub async fn handle_talent_matches(
    State(state): State<AppState>,
    Query(params): Query<TalentMatchesQuery>,
) -> Result<Json<MatchesResponse<SanitizedTalent>>, AppError> {
    let job_id = params
        .job_id
        .ok_or_else(|| AppError::Validation("Job ID is required".to_string()))?;
    let limit = params.limit.unwrap_or(state.config.match_default_limit);
    let min_score = params
        .min_score
        .unwrap_or(state.config.match_default_min_score);

    let job: JobPosting = state
        .jobs
        .find_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?
        .into();

    let rows = state.talents.list_profiles().await?;
    let profiles: Vec<CandidateProfile> = rows.iter().map(|r| r.to_candidate_profile()).collect();

    let applied: HashSet<String> = state
        .applications
        .applicant_ids(job_id)
        .await?
        .into_iter()
        .map(|id| id.to_string())
        .collect();

    let matches = find_matching_candidates_for_job(&job, &profiles, &applied, limit, min_score)?;

    let rows_by_user: HashMap<String, &TalentProfileRow> =
        rows.iter().map(|r| (r.user_id.to_string(), r)).collect();
    let sanitized: Vec<SanitizedTalent> = matches
        .into_iter()
        .filter_map(|m| {
            rows_by_user
                .get(&m.candidate.id)
                .map(|row| SanitizedTalent::new(row, m.match_score))
        })
        .collect();

    debug!(
        "Talent matches for job {job_id}: {} of {} profiles ({} already applied)",
        sanitized.len(),
        rows.len(),
        applied.len()
    );

    Ok(Json(sanitized.into()))
}
