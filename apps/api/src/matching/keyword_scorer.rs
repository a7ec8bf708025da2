//! Relevance scoring for talent search — pluggable, trait-based.
//!
//! Default: `KeywordRelevanceScorer` (substring keyword hits on title and skills).
//! `AppState` holds an `Arc<dyn RelevanceScorer>`, so a semantic scorer can replace it
//! without touching the search handler.

use crate::matching::models::CandidateSearchResult;
use crate::matching::overlap::contains_lowercase;

pub const DEFAULT_BASE_SCORE: f64 = 50.0;
pub const TITLE_KEYWORD_BOOST: f64 = 10.0;
pub const SKILL_KEYWORD_BOOST: f64 = 15.0;
pub const MAX_SCORE: f64 = 100.0;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Re-scores search results for a free-text query.
///
/// Implementations must keep length and order; only `match_score` may change.
pub trait RelevanceScorer: Send + Sync {
    fn rescore(
        &self,
        candidates: Vec<CandidateSearchResult>,
        query: &str,
    ) -> Vec<CandidateSearchResult>;

    /// Label reported in logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordRelevanceScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct KeywordRelevanceScorer;

impl RelevanceScorer for KeywordRelevanceScorer {
    fn rescore(
        &self,
        candidates: Vec<CandidateSearchResult>,
        query: &str,
    ) -> Vec<CandidateSearchResult> {
        apply_keyword_boost(candidates, query)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Adds keyword boosts to each candidate's baseline score.
///
/// Per lowercase keyword: +10 if the title contains it, +15 if any skill contains it.
/// Baseline is the existing `match_score`, or 50 when absent. Result is capped at 100.
/// A blank query leaves every score untouched.
pub fn apply_keyword_boost(
    candidates: Vec<CandidateSearchResult>,
    query: &str,
) -> Vec<CandidateSearchResult> {
    let keywords = tokenize_query(query);
    if keywords.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .map(|mut candidate| {
            candidate.match_score = Some(boosted_score(&candidate, &keywords));
            candidate
        })
        .collect()
}

/// Sorts by `match_score`, highest first. Stable; records without a score go last.
pub fn sort_by_match_score(candidates: &mut [CandidateSearchResult]) {
    candidates.sort_by(|a, b| match (a.match_score, b.match_score) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

fn tokenize_query(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

fn boosted_score(candidate: &CandidateSearchResult, keywords: &[String]) -> f64 {
    let mut score = candidate.match_score.unwrap_or(DEFAULT_BASE_SCORE);

    for keyword in keywords {
        if contains_lowercase(&candidate.title, keyword) {
            score += TITLE_KEYWORD_BOOST;
        }
    }

    let skills_lower: Vec<String> = candidate.skills.iter().map(|s| s.to_lowercase()).collect();
    for keyword in keywords {
        if skills_lower.iter().any(|skill| skill.contains(keyword.as_str())) {
            score += SKILL_KEYWORD_BOOST;
        }
    }

    score.min(MAX_SCORE)
}
