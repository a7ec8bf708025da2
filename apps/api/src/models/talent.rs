use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::models::CandidateProfile;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TalentProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<i32>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub german_level: Option<String>,
    pub education: Option<String>,
    pub preferred_locations: Option<Vec<String>>,
    pub preferred_job_types: Option<Vec<String>>,
}

impl TalentProfileRow {
    /// Matching identity is the owning user id, not the profile row id.
    pub fn to_candidate_profile(&self) -> CandidateProfile {
        CandidateProfile {
            id: self.user_id.to_string(),
            skills: self.skills.clone().unwrap_or_default(),
            preferred_locations: self.preferred_locations.clone(),
            preferred_job_types: self.preferred_job_types.clone(),
        }
    }

    /// "city, country" as shown to hiring managers.
    pub fn display_location(&self) -> String {
        format!(
            "{}, {}",
            self.city.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row() -> TalentProfileRow {
        TalentProfileRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: Some("Aisha Khan".to_string()),
            title: Some("Senior Frontend Developer".to_string()),
            skills: Some(vec!["React".to_string()]),
            experience: Some(5),
            city: Some("Karachi".to_string()),
            country: Some("Pakistan".to_string()),
            german_level: Some("A1".to_string()),
            education: None,
            preferred_locations: None,
            preferred_job_types: Some(vec!["full-time".to_string()]),
        }
    }

    #[test]
    fn test_candidate_profile_uses_user_id() {
        let row = make_row();
        let profile = row.to_candidate_profile();
        assert_eq!(profile.id, row.user_id.to_string());
        assert_eq!(profile.skills, vec!["React".to_string()]);
        assert!(profile.preferred_locations.is_none());
    }

    #[test]
    fn test_display_location() {
        assert_eq!(make_row().display_location(), "Karachi, Pakistan");
    }
}
