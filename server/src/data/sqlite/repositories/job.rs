//! Job repository for SQLite operations

use sqlx::SqlitePool;

use crate::data::filters::QueryPlan;
use crate::data::sql::Backend;
use crate::data::sqlite::SqliteError;
use crate::data::types::{JOB_COLUMNS, JobDraft, JobRecord, JobTuple, SqlValue};
use crate::utils::time::now_millis;

/// Run a filter plan against the jobs table
pub async fn search_jobs(pool: &SqlitePool, plan: &QueryPlan) -> Result<Vec<JobRecord>, SqliteError> {
    let sql = plan.to_select_sql(Backend::Sqlite.dialect(), JOB_COLUMNS);

    let mut query = sqlx::query_as::<_, JobTuple>(&sql);
    for value in plan.params() {
        query = match value {
            SqlValue::Text(s) => query.bind(s.as_str()),
            SqlValue::Int(v) => query.bind(*v),
        };
    }

    let rows = query.fetch_all(pool).await?;
    rows.into_iter()
        .map(|row| JobRecord::try_from(row).map_err(SqliteError::from))
        .collect()
}

/// Insert a job, returning the stored row
pub async fn create_job(pool: &SqlitePool, draft: &JobDraft) -> Result<JobRecord, SqliteError> {
    let now = now_millis();

    let sql = format!(
        r#"
        INSERT INTO jobs (title, company_name, location, title_folded, location_folded,
                          job_type, salary_range, description, application_deadline,
                          created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        JOB_COLUMNS
    );
    let row = sqlx::query_as::<_, JobTuple>(&sql)
        .bind(&draft.title)
        .bind(&draft.company_name)
        .bind(&draft.location)
        .bind(draft.title.to_lowercase())
        .bind(draft.location.to_lowercase())
        .bind(draft.job_type.as_str())
        .bind(draft.salary_range)
        .bind(&draft.description)
        .bind(draft.deadline_str())
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

    let job = JobRecord::try_from(row)?;
    tracing::debug!(job_id = job.id, title = %job.title, "Created job");
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::data::filters::{FilterQueryBuilder, JobFilterRequest};
    use crate::data::types::JobType;

    async fn setup_test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .unwrap();
        sqlx::query(crate::data::sqlite::schema::SCHEMA)
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    fn draft(title: &str, location: &str, job_type: JobType, salary_range: i64) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            company_name: "Acme".to_string(),
            location: location.to_string(),
            job_type,
            salary_range,
            description: "Build and maintain services for a growing product team.".to_string(),
            application_deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        }
    }

    async fn search(pool: &SqlitePool, filters: JobFilterRequest) -> Vec<JobRecord> {
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        search_jobs(pool, &plan).await.unwrap()
    }

    fn titles(jobs: &[JobRecord]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_job() {
        let pool = setup_test_pool().await;
        let job = create_job(&pool, &draft("Backend Engineer", "Berlin", JobType::FullTime, 960))
            .await
            .unwrap();

        assert!(job.id > 0);
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.salary_range, 960);
        assert_eq!(
            job.application_deadline,
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
        assert_eq!(job.created_at, job.updated_at);
    }

    #[tokio::test]
    async fn test_create_job_rejects_negative_salary() {
        let pool = setup_test_pool().await;
        let result = create_job(&pool, &draft("Intern", "Remote", JobType::Internship, -1)).await;
        assert!(matches!(result, Err(SqliteError::Database(_))));
    }

    #[tokio::test]
    async fn test_search_without_filters_returns_newest_first() {
        let pool = setup_test_pool().await;
        for title in ["First", "Second", "Third"] {
            create_job(&pool, &draft(title, "Remote", JobType::Contract, 100))
                .await
                .unwrap();
        }

        let jobs = search(&pool, JobFilterRequest::default()).await;
        assert_eq!(titles(&jobs), vec!["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn test_title_search_is_case_insensitive() {
        let pool = setup_test_pool().await;
        create_job(&pool, &draft("Senior Engineer", "Berlin", JobType::FullTime, 900))
            .await
            .unwrap();
        create_job(&pool, &draft("ENGINEER II", "Paris", JobType::FullTime, 700))
            .await
            .unwrap();
        create_job(&pool, &draft("Designer", "Paris", JobType::PartTime, 300))
            .await
            .unwrap();

        let jobs = search(
            &pool,
            JobFilterRequest {
                title_query: Some("engineer".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(titles(&jobs), vec!["ENGINEER II", "Senior Engineer"]);
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let pool = setup_test_pool().await;
        create_job(&pool, &draft("Ingénieur ÉLECTRIQUE", "Zürich", JobType::FullTime, 900))
            .await
            .unwrap();
        create_job(&pool, &draft("Électricien", "Genève", JobType::Contract, 500))
            .await
            .unwrap();

        let by_title = search(
            &pool,
            JobFilterRequest {
                title_query: Some("électrique".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(titles(&by_title), vec!["Ingénieur ÉLECTRIQUE"]);

        let by_location = search(
            &pool,
            JobFilterRequest {
                location: Some("ZÜRICH".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(titles(&by_location), vec!["Ingénieur ÉLECTRIQUE"]);

        let both = search(
            &pool,
            JobFilterRequest {
                title_query: Some("ÉLEC".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(titles(&both), vec!["Électricien", "Ingénieur ÉLECTRIQUE"]);
    }

    #[tokio::test]
    async fn test_location_is_substring_match() {
        let pool = setup_test_pool().await;
        create_job(&pool, &draft("A", "Berlin, Germany", JobType::FullTime, 500))
            .await
            .unwrap();
        create_job(&pool, &draft("B", "Munich", JobType::FullTime, 500))
            .await
            .unwrap();

        let jobs = search(
            &pool,
            JobFilterRequest {
                location: Some("berlin".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(titles(&jobs), vec!["A"]);
    }

    #[tokio::test]
    async fn test_job_type_and_salary_filters() {
        let pool = setup_test_pool().await;
        create_job(&pool, &draft("Low", "Remote", JobType::FullTime, 200))
            .await
            .unwrap();
        create_job(&pool, &draft("Mid", "Remote", JobType::FullTime, 600))
            .await
            .unwrap();
        create_job(&pool, &draft("High", "Remote", JobType::FullTime, 1200))
            .await
            .unwrap();
        create_job(&pool, &draft("Mid contract", "Remote", JobType::Contract, 600))
            .await
            .unwrap();

        // 20k..80k per month is 240..960 per year.
        let jobs = search(
            &pool,
            JobFilterRequest {
                job_type: Some("Full-time".to_string()),
                min_salary: Some(20),
                max_salary: Some(80),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(titles(&jobs), vec!["Mid"]);
    }

    #[tokio::test]
    async fn test_like_metacharacters_match_literally() {
        let pool = setup_test_pool().await;
        create_job(&pool, &draft("100% Remote Engineer", "Remote", JobType::FullTime, 500))
            .await
            .unwrap();
        create_job(&pool, &draft("1000 Engineers", "Remote", JobType::FullTime, 500))
            .await
            .unwrap();

        let jobs = search(
            &pool,
            JobFilterRequest {
                title_query: Some("100%".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(titles(&jobs), vec!["100% Remote Engineer"]);
    }

    #[tokio::test]
    async fn test_malformed_row_is_reported() {
        let pool = setup_test_pool().await;
        let job = create_job(&pool, &draft("Broken", "Remote", JobType::FullTime, 100))
            .await
            .unwrap();
        sqlx::query("UPDATE jobs SET application_deadline = 'soon' WHERE id = ?")
            .bind(job.id)
            .execute(&pool)
            .await
            .unwrap();

        let plan = FilterQueryBuilder::build(&JobFilterRequest::default()).unwrap();
        let result = search_jobs(&pool, &plan).await;
        assert!(matches!(result, Err(SqliteError::InvalidRow(ref row)) if row.id == job.id));
    }
}
