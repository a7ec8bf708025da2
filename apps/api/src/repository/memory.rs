use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::models::CandidateSearchResult;
use crate::models::candidate::CandidateRow;
use crate::models::job::{JobApplicationRow, JobRow};
use crate::models::talent::TalentProfileRow;
use crate::repository::{
    ApplicationRepository, CandidateRepository, JobRepository, TalentRepository,
    JOB_STATUS_ACTIVE,
};
use crate::search::filters::SearchFilters;

/// In-process store implementing every repository trait. Insertion order is preserved.
#[derive(Default)]
pub struct InMemoryStore {
    jobs: RwLock<Vec<JobRow>>,
    talents: RwLock<Vec<TalentProfileRow>>,
    applications: RwLock<Vec<JobApplicationRow>>,
    candidates: RwLock<Vec<CandidateRow>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_job(&self, job: JobRow) {
        self.jobs.write().await.push(job);
    }

    pub async fn insert_talent(&self, talent: TalentProfileRow) {
        self.talents.write().await.push(talent);
    }

    pub async fn insert_application(&self, user_id: Uuid, job_id: Uuid) {
        self.applications.write().await.push(JobApplicationRow {
            id: Uuid::new_v4(),
            user_id,
            job_id,
        });
    }

    pub async fn insert_candidate(&self, candidate: CandidateRow) {
        self.candidates.write().await.push(candidate);
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError> {
        Ok(self.jobs.read().await.iter().find(|j| j.id == job_id).cloned())
    }

    async fn list_active_jobs(&self) -> Result<Vec<JobRow>, AppError> {
        Ok(self
            .jobs
            .read()
            .await
            .iter()
            .filter(|j| j.status == JOB_STATUS_ACTIVE)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TalentRepository for InMemoryStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<TalentProfileRow>, AppError> {
        Ok(self
            .talents
            .read()
            .await
            .iter()
            .find(|t| t.user_id == user_id)
            .cloned())
    }

    async fn list_profiles(&self) -> Result<Vec<TalentProfileRow>, AppError> {
        Ok(self.talents.read().await.clone())
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn applied_job_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(self
            .applications
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.job_id)
            .collect())
    }

    async fn applicant_ids(&self, job_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(self
            .applications
            .read()
            .await
            .iter()
            .filter(|a| a.job_id == job_id)
            .map(|a| a.user_id)
            .collect())
    }
}

#[async_trait]
impl CandidateRepository for InMemoryStore {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<CandidateRow>, AppError> {
        Ok(self
            .candidates
            .read()
            .await
            .iter()
            .filter(|row| filters.matches(&CandidateSearchResult::from((*row).clone())))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_job(status: &str) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            title: "Engineer".to_string(),
            company: None,
            location: Some("Berlin".to_string()),
            remote: Some(false),
            job_type: Some("full-time".to_string()),
            skills: Some(vec!["Rust".to_string()]),
            requirements: None,
            status: status.to_string(),
            posted_by: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_active_jobs_skips_closed() {
        let store = InMemoryStore::new();
        let open = make_job("active");
        store.insert_job(open.clone()).await;
        store.insert_job(make_job("closed")).await;

        let jobs = store.list_active_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, open.id);
        assert!(store.find_job(open.id).await.unwrap().is_some());
        assert!(store.find_job(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_applications_index_both_ways() {
        let store = InMemoryStore::new();
        let (user, job_a, job_b) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        store.insert_application(user, job_a).await;
        store.insert_application(user, job_b).await;
        store.insert_application(Uuid::new_v4(), job_a).await;

        assert_eq!(store.applied_job_ids(user).await.unwrap(), vec![job_a, job_b]);
        let applicants = store.applicant_ids(job_a).await.unwrap();
        assert_eq!(applicants.len(), 2);
        assert!(applicants.contains(&user));
    }
}
