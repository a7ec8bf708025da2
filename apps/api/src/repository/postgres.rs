use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;
use crate::models::talent::TalentProfileRow;
use crate::repository::{
    ApplicationRepository, CandidateRepository, JobRepository, TalentRepository,
    JOB_STATUS_ACTIVE,
};
use crate::search::filters::SearchFilters;

/// Postgres-backed implementation of every repository trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgStore {
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError> {
        Ok(sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_active_jobs(&self) -> Result<Vec<JobRow>, AppError> {
        Ok(sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE status = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(JOB_STATUS_ACTIVE)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl TalentRepository for PgStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<TalentProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, TalentProfileRow>(
            r#"
            SELECT id, user_id, full_name, title, skills, experience, city, country,
                   german_level, education, preferred_locations, preferred_job_types
            FROM talent_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_profiles(&self) -> Result<Vec<TalentProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, TalentProfileRow>(
            r#"
            SELECT id, user_id, full_name, title, skills, experience, city, country,
                   german_level, education, preferred_locations, preferred_job_types
            FROM talent_profiles
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl ApplicationRepository for PgStore {
    async fn applied_job_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(
            sqlx::query_scalar::<_, Uuid>("SELECT job_id FROM job_applications WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn applicant_ids(&self, job_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(
            sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM job_applications WHERE job_id = $1")
                .bind(job_id)
                .fetch_all(&self.pool)
                .await?,
        )
    }
}

#[async_trait]
impl CandidateRepository for PgStore {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<CandidateRow>, AppError> {
        let mut query = build_search_query(filters);
        Ok(query
            .build_query_as::<CandidateRow>()
            .fetch_all(&self.pool)
            .await?)
    }
}

const LIKE_ESCAPE: &str = " ESCAPE '\\'";

/// `%value%` with LIKE metacharacters escaped, so user input matches literally.
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Pushes `SearchFilters` down as SQL. Mirrors `SearchFilters::matches`.
fn build_search_query(filters: &SearchFilters) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM candidates WHERE TRUE");

    if let Some((min, max)) = filters.experience_range() {
        query
            .push(" AND experience >= ")
            .push_bind(min)
            .push(" AND experience <= ")
            .push_bind(max);
    }

    let ilike_filters = [
        ("location", filters.location()),
        ("country", filters.country()),
        ("city", filters.city()),
        ("availability", filters.availability()),
    ];
    for (column, value) in ilike_filters {
        if let Some(value) = value {
            query
                .push(format!(" AND {column} ILIKE "))
                .push_bind(like_pattern(value))
                .push(LIKE_ESCAPE);
        }
    }

    if let Some(skills) = filters.skills() {
        query.push(" AND skills @> ").push_bind(skills.to_vec());
    }

    for value in [filters.language(), filters.language_proficiency()]
        .into_iter()
        .flatten()
    {
        query
            .push(" AND languages::text ILIKE ")
            .push_bind(like_pattern(value))
            .push(LIKE_ESCAPE);
    }

    if let Some(level) = filters.german_level() {
        query.push(" AND german_level = ").push_bind(level.to_string());
    }

    if let Some(status) = filters.visa_status() {
        query.push(" AND visa_status = ").push_bind(status);
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sql_for(value: serde_json::Value) -> String {
        let filters: SearchFilters = serde_json::from_value(value).unwrap();
        build_search_query(&filters).sql().to_string()
    }

    #[test]
    fn test_no_filters_selects_everything() {
        assert_eq!(sql_for(json!({})), "SELECT * FROM candidates WHERE TRUE");
    }

    #[test]
    fn test_filters_are_bound_not_interpolated() {
        let sql = sql_for(json!({
            "experience": [2, 6],
            "city": "Lahore'; DROP TABLE candidates; --",
            "skills": ["React"],
            "visaRequired": "required"
        }));
        assert!(sql.contains("experience >= $1 AND experience <= $2"), "{sql}");
        assert!(sql.contains("city ILIKE $3"), "{sql}");
        assert!(sql.contains("skills @> $4"), "{sql}");
        assert!(sql.contains("visa_status = $5"), "{sql}");
        assert!(!sql.contains("DROP TABLE"));
    }

    #[test]
    fn test_ilike_clauses_declare_escape_character() {
        let sql = sql_for(json!({ "location": "Berlin", "language": "German" }));
        assert!(sql.contains("location ILIKE $1 ESCAPE '\\'"), "{sql}");
        assert!(sql.contains("languages::text ILIKE $2 ESCAPE '\\'"), "{sql}");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("Berlin"), "%Berlin%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\dir"), "%c:\\\\dir%");
    }

    #[test]
    fn test_all_sentinel_adds_no_clause() {
        let sql = sql_for(json!({ "location": "all", "germanLevel": "all" }));
        assert_eq!(sql, "SELECT * FROM candidates WHERE TRUE");
    }
}
