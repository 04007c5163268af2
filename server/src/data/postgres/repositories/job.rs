//! Job repository for PostgreSQL operations

use sqlx::PgPool;

use crate::data::filters::QueryPlan;
use crate::data::postgres::PostgresError;
use crate::data::sql::Backend;
use crate::data::types::{JOB_COLUMNS, JobDraft, JobRecord, JobTuple, SqlValue};
use crate::utils::time::now_millis;

/// Run a filter plan against the jobs table
pub async fn search_jobs(pool: &PgPool, plan: &QueryPlan) -> Result<Vec<JobRecord>, PostgresError> {
    let sql = plan.to_select_sql(Backend::Postgres.dialect(), JOB_COLUMNS);

    let mut query = sqlx::query_as::<_, JobTuple>(&sql);
    for value in plan.params() {
        query = match value {
            SqlValue::Text(s) => query.bind(s.as_str()),
            SqlValue::Int(v) => query.bind(*v),
        };
    }

    let rows = query.fetch_all(pool).await?;
    rows.into_iter()
        .map(|row| JobRecord::try_from(row).map_err(PostgresError::from))
        .collect()
}

/// Insert a job, returning the stored row
pub async fn create_job(pool: &PgPool, draft: &JobDraft) -> Result<JobRecord, PostgresError> {
    let now = now_millis();

    let sql = format!(
        r#"
        INSERT INTO jobs (title, company_name, location, job_type, salary_range,
                          description, application_deadline, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING {}
        "#,
        JOB_COLUMNS
    );
    let row = sqlx::query_as::<_, JobTuple>(&sql)
        .bind(&draft.title)
        .bind(&draft.company_name)
        .bind(&draft.location)
        .bind(draft.job_type.as_str())
        .bind(draft.salary_range)
        .bind(&draft.description)
        .bind(draft.deadline_str())
        .bind(now)
        .fetch_one(pool)
        .await?;

    let job = JobRecord::try_from(row)?;
    tracing::debug!(job_id = job.id, title = %job.title, "Created job");
    Ok(job)
}
