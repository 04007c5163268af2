//! Job row types shared by the SQLite and PostgreSQL repositories

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::JobType;
use crate::utils::time::millis_to_datetime;

/// Storage format of `application_deadline`
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Column list selected by every job query, in `JobTuple` order
pub const JOB_COLUMNS: &str = "id, title, company_name, location, job_type, salary_range, \
     description, application_deadline, created_at, updated_at";

/// Raw `jobs` row as fetched by `sqlx::query_as` (columns in `JOB_COLUMNS` order)
pub type JobTuple = (
    i64,
    String,
    String,
    String,
    String,
    i64,
    String,
    String,
    i64,
    i64,
);

/// A stored job posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JobRecord {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: JobType,
    /// Annual salary
    pub salary_range: i64,
    pub description: String,
    pub application_deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_range: i64,
    pub description: String,
    pub application_deadline: NaiveDate,
}

impl JobDraft {
    pub fn deadline_str(&self) -> String {
        self.application_deadline.format(DEADLINE_FORMAT).to_string()
    }
}

/// A stored row that cannot be mapped back to a `JobRecord`
#[derive(Error, Debug)]
#[error("Invalid job row {id}: {reason}")]
pub struct InvalidJobRow {
    pub id: i64,
    pub reason: String,
}

impl TryFrom<JobTuple> for JobRecord {
    type Error = InvalidJobRow;

    fn try_from(row: JobTuple) -> Result<Self, Self::Error> {
        let (
            id,
            title,
            company_name,
            location,
            job_type,
            salary_range,
            description,
            application_deadline,
            created_at,
            updated_at,
        ) = row;

        let job_type = JobType::parse(&job_type).ok_or_else(|| InvalidJobRow {
            id,
            reason: format!("unknown job_type '{}'", job_type),
        })?;
        let application_deadline = NaiveDate::parse_from_str(&application_deadline, DEADLINE_FORMAT)
            .map_err(|e| InvalidJobRow {
                id,
                reason: format!("bad application_deadline '{}': {}", application_deadline, e),
            })?;

        Ok(Self {
            id,
            title,
            company_name,
            location,
            job_type,
            salary_range,
            description,
            application_deadline,
            created_at: millis_to_datetime(created_at),
            updated_at: millis_to_datetime(updated_at),
        })
    }
}
