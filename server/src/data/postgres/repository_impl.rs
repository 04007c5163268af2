//! JobRepository trait implementation for PostgreSQL

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::QueryPlan;
use crate::data::traits::JobRepository;
use crate::data::types::{JobDraft, JobRecord};

use super::PostgresService;
use super::repositories::job;

#[async_trait]
impl JobRepository for Arc<PostgresService> {
    async fn search_jobs(&self, plan: &QueryPlan) -> Result<Vec<JobRecord>, DataError> {
        job::search_jobs(self.pool(), plan)
            .await
            .map_err(Into::into)
    }

    async fn create_job(&self, draft: &JobDraft) -> Result<JobRecord, DataError> {
        job::create_job(self.pool(), draft)
            .await
            .map_err(Into::into)
    }
}
