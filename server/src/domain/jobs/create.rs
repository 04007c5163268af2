use std::sync::Arc;

use super::JobServiceError;
use crate::data::TransactionalService;
use crate::data::types::{JobDraft, JobRecord};

/// Job posting creation
pub struct JobCreationService {
    database: Arc<TransactionalService>,
}

impl JobCreationService {
    pub fn new(database: Arc<TransactionalService>) -> Self {
        Self { database }
    }

    pub async fn create(&self, draft: JobDraft) -> Result<JobRecord, JobServiceError> {
        let job = self.database.repository().create_job(&draft).await?;
        tracing::info!(job_id = job.id, job_type = %job.job_type, "Job created");
        Ok(job)
    }
}
