use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A talent's matching-relevant profile. Absent preferences never constrain a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_job_types: Option<Vec<String>>,
}

/// A job posting as seen by the matcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub job_type: String,
}

/// Result of scoring one candidate against one job. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub job_id: String,
    pub candidate_id: String,
    pub score: f64, // 0 – 100
    pub matched_skills: Vec<String>,
    pub total_skills_required: usize,
    pub matched_requirements: usize,
    pub total_requirements: usize,
    pub location_match: bool,
    pub job_type_match: bool,
}

/// A job together with its score for a given candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: MatchScore,
}

/// A candidate together with its score for a given job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: CandidateProfile,
    pub match_score: MatchScore,
}

/// A talent-search record. Only `match_score` is touched by relevance scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSearchResult {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Option<i32>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub german_level: Option<String>,
    #[serde(default)]
    pub visa_status: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    #[serde(default)]
    pub proficiency: String,
}

impl LanguageSkill {
    /// Parses the `languages` JSON column, skipping entries without a `language`.
    pub fn from_json(value: &Value) -> Vec<LanguageSkill> {
        value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}
