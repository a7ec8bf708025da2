use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::models::JobPosting;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub job_type: Option<String>,
    pub skills: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub status: String,
    pub posted_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        JobPosting {
            id: row.id.to_string(),
            title: row.title,
            company: row.company,
            skills: row.skills.unwrap_or_default(),
            requirements: row.requirements.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            remote: row.remote.unwrap_or(false),
            job_type: row.job_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Uuid,
}
