//! Repository traits for database backends
//!
//! SQLite and PostgreSQL each implement [`JobRepository`] for their
//! `Arc<...Service>`; callers go through `TransactionalService::repository()`.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::QueryPlan;
use crate::data::types::{JobDraft, JobRecord};

/// Repository trait for job postings
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Execute a filter plan, returning matching jobs newest first
    async fn search_jobs(&self, plan: &QueryPlan) -> Result<Vec<JobRecord>, DataError>;

    /// Insert a job and return the stored row with id and timestamps
    async fn create_job(&self, draft: &JobDraft) -> Result<JobRecord, DataError>;
}
