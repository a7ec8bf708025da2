//! Per-entity repository traits.
//!
//! Handlers only see these traits. `PgStore` is the production backend;
//! `InMemoryStore` (test builds only) backs handler tests. Both live behind
//! `Arc<dyn ...>` in `AppState`.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;
use crate::models::talent::TalentProfileRow;
use crate::search::filters::SearchFilters;

#[cfg(test)]
pub use memory::InMemoryStore;
pub use postgres::PgStore;

pub const JOB_STATUS_ACTIVE: &str = "active";

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError>;

    /// Jobs with status `active`, oldest first.
    async fn list_active_jobs(&self) -> Result<Vec<JobRow>, AppError>;
}

#[async_trait]
pub trait TalentRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<TalentProfileRow>, AppError>;

    async fn list_profiles(&self) -> Result<Vec<TalentProfileRow>, AppError>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Jobs the user has already applied to.
    async fn applied_job_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, AppError>;

    /// Users who have already applied to the job.
    async fn applicant_ids(&self, job_id: Uuid) -> Result<Vec<Uuid>, AppError>;
}

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<CandidateRow>, AppError>;
}
