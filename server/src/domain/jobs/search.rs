use std::sync::Arc;

use super::JobServiceError;
use crate::data::TransactionalService;
use crate::data::filters::{FilterQueryBuilder, JobFilterRequest};
use crate::data::types::JobRecord;

/// Filtered job listing
pub struct JobSearchService {
    database: Arc<TransactionalService>,
}

impl JobSearchService {
    pub fn new(database: Arc<TransactionalService>) -> Self {
        Self { database }
    }

    /// Validate the filters, then fetch matching jobs newest first.
    ///
    /// Validation failures return before the store is touched.
    pub async fn search(&self, filters: &JobFilterRequest) -> Result<Vec<JobRecord>, JobServiceError> {
        let plan = FilterQueryBuilder::build(filters)?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let backend = self.database.sql_backend();
            tracing::debug!(
                backend = %backend,
                predicates = plan.predicates().len(),
                unfiltered = plan.is_unfiltered(),
                where_clause = %plan.where_clause(backend.dialect()),
                "Searching jobs"
            );
        }

        let jobs = self.database.repository().search_jobs(&plan).await?;
        tracing::debug!(count = jobs.len(), "Jobs fetched");
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::SqliteService;
    use crate::data::filters::FilterError;
    use crate::data::types::{JobDraft, JobType};

    async fn setup() -> Arc<TransactionalService> {
        let sqlite = SqliteService::in_memory().await.unwrap();
        Arc::new(TransactionalService::Sqlite(Arc::new(sqlite)))
    }

    fn draft(title: &str, location: &str, job_type: JobType, salary: i64) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            company_name: "Acme".to_string(),
            location: location.to_string(),
            job_type,
            salary_range: salary,
            description: "Build and maintain services for the platform team.".to_string(),
            application_deadline: NaiveDate::from_ymd_opt(2027, 1, 31).unwrap(),
        }
    }

    async fn seed(database: &Arc<TransactionalService>) {
        let repo = database.repository();
        for d in [
            draft("Backend Developer", "Berlin", JobType::FullTime, 600),
            draft("Frontend Developer", "Remote", JobType::Contract, 300),
            draft("Data Intern", "Berlin", JobType::Internship, 100),
            draft("Senior DevOps", "Munich", JobType::FullTime, 1200),
        ] {
            repo.create_job(&d).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_search_without_filters_returns_all_newest_first() {
        let database = setup().await;
        seed(&database).await;
        let service = JobSearchService::new(database);

        let jobs = service.search(&JobFilterRequest::default()).await.unwrap();
        let titles: Vec<_> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Senior DevOps",
                "Data Intern",
                "Frontend Developer",
                "Backend Developer"
            ]
        );
    }

    #[tokio::test]
    async fn test_search_dev_with_salary_window() {
        let database = setup().await;
        seed(&database).await;
        let service = JobSearchService::new(database);

        // 20k..80k per month covers 240..960 per year
        let filters = JobFilterRequest {
            title_query: Some("dev".to_string()),
            min_salary: Some(20),
            max_salary: Some(80),
            ..Default::default()
        };
        let jobs = service.search(&filters).await.unwrap();
        let titles: Vec<_> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Frontend Developer", "Backend Developer"]);
    }

    #[tokio::test]
    async fn test_search_by_type_and_location() {
        let database = setup().await;
        seed(&database).await;
        let service = JobSearchService::new(database);

        let filters = JobFilterRequest {
            location: Some("berlin".to_string()),
            job_type: Some("Full-time".to_string()),
            ..Default::default()
        };
        let jobs = service.search(&filters).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Backend Developer");
    }

    #[tokio::test]
    async fn test_search_rejects_unknown_job_type() {
        let service = JobSearchService::new(setup().await);

        let filters = JobFilterRequest {
            job_type: Some("Freelance".to_string()),
            ..Default::default()
        };
        let err = service.search(&filters).await.unwrap_err();
        assert!(matches!(
            err,
            JobServiceError::Validation(FilterError::InvalidEnumValue { field: "job_type", ref value })
                if value == "Freelance"
        ));
    }

    #[tokio::test]
    async fn test_search_validation_runs_before_store_access() {
        let database = setup().await;
        database.close().await;
        let service = JobSearchService::new(database);

        let filters = JobFilterRequest {
            min_salary: Some(50),
            max_salary: Some(30),
            ..Default::default()
        };
        let err = service.search(&filters).await.unwrap_err();
        assert!(matches!(
            err,
            JobServiceError::Validation(FilterError::InvalidRange { min: 50, max: 30 })
        ));
    }

    #[tokio::test]
    async fn test_search_on_closed_store_is_storage_error() {
        let database = setup().await;
        database.close().await;
        let service = JobSearchService::new(database);

        let err = service.search(&JobFilterRequest::default()).await.unwrap_err();
        assert!(matches!(err, JobServiceError::Storage(_)));
    }
}
