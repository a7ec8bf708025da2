use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::models::{CandidateSearchResult, LanguageSkill};

/// Row of the `candidates` table searched by hiring managers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub name: String,
    pub title: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub match_score: Option<f64>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<i32>,
    pub education: Option<String>,
    pub availability: Option<String>,
    pub languages: Option<Value>,
    pub german_level: Option<String>,
    pub visa_status: Option<String>,
    pub avatar: Option<String>,
}

impl From<CandidateRow> for CandidateSearchResult {
    fn from(row: CandidateRow) -> Self {
        CandidateSearchResult {
            id: row.id.to_string(),
            name: row.name,
            title: row.title.unwrap_or_default(),
            location: row.location,
            country: row.country,
            city: row.city,
            match_score: row.match_score,
            skills: row.skills.unwrap_or_default(),
            experience: row.experience,
            education: row.education,
            availability: row.availability,
            languages: row
                .languages
                .as_ref()
                .map(LanguageSkill::from_json)
                .unwrap_or_default(),
            german_level: row.german_level,
            visa_status: row.visa_status,
            avatar: row.avatar,
        }
    }
}
