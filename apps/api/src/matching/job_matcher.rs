//! Profile ↔ job match scoring.
//!
//! score = skill_match_percentage × SKILL_WEIGHT
//!       + LOCATION_WEIGHT if location compatible
//!       + JOB_TYPE_WEIGHT if job type compatible
//!
//! The weights are fixed policy, so the result always lies in 0 – 100.

use std::collections::HashSet;

use crate::matching::models::{
    CandidateProfile, JobPosting, MatchScore, ScoredCandidate, ScoredJob,
};
use crate::matching::overlap::{any_eq_ignore_case, matched_skills, preference};
use crate::matching::MatchError;

pub const SKILL_WEIGHT: f64 = 0.5;
pub const LOCATION_WEIGHT: f64 = 25.0;
pub const JOB_TYPE_WEIGHT: f64 = 25.0;

/// Scores one candidate against one job.
///
/// Fails only on blank identities. Missing preferences are permissive and an
/// empty job skill list contributes 0 to the skill component.
pub fn compute_match_score(
    candidate: &CandidateProfile,
    job: &JobPosting,
) -> Result<MatchScore, MatchError> {
    if candidate.id.trim().is_empty() {
        return Err(MatchError::InvalidInput(
            "candidate profile has no id".to_string(),
        ));
    }
    if job.id.trim().is_empty() {
        return Err(MatchError::InvalidInput("job posting has no id".to_string()));
    }

    let matched = matched_skills(&candidate.skills, &job.skills);
    let skill_match_percentage = if job.skills.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job.skills.len() as f64 * 100.0
    };

    // Placeholder coverage signal: reported, never scored.
    let matched_requirements = usize::from(!job.requirements.is_empty());

    let location_match = job.remote
        || preference(&candidate.preferred_locations)
            .map(|locations| any_eq_ignore_case(locations, &job.location))
            .unwrap_or(true);

    let job_type_match = preference(&candidate.preferred_job_types)
        .map(|types| any_eq_ignore_case(types, &job.job_type))
        .unwrap_or(true);

    let score = skill_match_percentage * SKILL_WEIGHT
        + if location_match { LOCATION_WEIGHT } else { 0.0 }
        + if job_type_match { JOB_TYPE_WEIGHT } else { 0.0 };

    Ok(MatchScore {
        job_id: job.id.clone(),
        candidate_id: candidate.id.clone(),
        score,
        matched_skills: matched,
        total_skills_required: job.skills.len(),
        matched_requirements,
        total_requirements: job.requirements.len(),
        location_match,
        job_type_match,
    })
}

/// Ranks `jobs` for one candidate, skipping `exclude_job_ids` (already applied).
pub fn find_matching_jobs_for_candidate(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    exclude_job_ids: &HashSet<String>,
    limit: usize,
    min_score: f64,
) -> Result<Vec<ScoredJob>, MatchError> {
    let mut scored = Vec::new();
    for job in jobs.iter().filter(|j| !exclude_job_ids.contains(&j.id)) {
        let match_score = compute_match_score(candidate, job)?;
        if match_score.score >= min_score {
            scored.push(ScoredJob {
                job: job.clone(),
                match_score,
            });
        }
    }

    rank(&mut scored, |s| s.match_score.score, limit);
    Ok(scored)
}

/// Ranks `candidates` for one job, skipping `exclude_candidate_ids` (already applied).
pub fn find_matching_candidates_for_job(
    job: &JobPosting,
    candidates: &[CandidateProfile],
    exclude_candidate_ids: &HashSet<String>,
    limit: usize,
    min_score: f64,
) -> Result<Vec<ScoredCandidate>, MatchError> {
    let mut scored = Vec::new();
    for candidate in candidates
        .iter()
        .filter(|c| !exclude_candidate_ids.contains(&c.id))
    {
        let match_score = compute_match_score(candidate, job)?;
        if match_score.score >= min_score {
            scored.push(ScoredCandidate {
                candidate: candidate.clone(),
                match_score,
            });
        }
    }

    rank(&mut scored, |s| s.match_score.score, limit);
    Ok(scored)
}

/// Stable descending sort on `key`, then truncate.
fn rank<T>(items: &mut Vec<T>, key: impl Fn(&T) -> f64, limit: usize) {
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
    items.truncate(limit);
}
