//! Job API types

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::types::{ApiError, parse_salary_param};
use crate::data::filters::JobFilterRequest;
use crate::data::types::{DEADLINE_FORMAT, JobDraft, JobType};

/// Query params for listing jobs
///
/// Salaries arrive as raw strings so that `minSalary=` means unset and
/// non-numeric input gets a precise error.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    /// Case-insensitive substring of the title
    #[validate(length(max = 200, message = "search must be at most 200 characters"))]
    pub search: Option<String>,

    /// Case-insensitive substring of the location
    #[validate(length(max = 200, message = "location must be at most 200 characters"))]
    pub location: Option<String>,

    /// One of Full-time, Part-time, Contract, Internship
    pub job_type: Option<String>,

    /// Lower bound in thousands per month
    pub min_salary: Option<String>,

    /// Upper bound in thousands per month
    pub max_salary: Option<String>,
}

impl JobListQuery {
    pub fn to_filters(&self) -> Result<JobFilterRequest, ApiError> {
        Ok(JobFilterRequest {
            title_query: self.search.clone(),
            location: self.location.clone(),
            job_type: self.job_type.clone(),
            min_salary: parse_salary_param("minSalary", &self.min_salary)?,
            max_salary: parse_salary_param("maxSalary", &self.max_salary)?,
        })
    }
}

/// Request body for creating a job
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    #[validate(length(min = 3, max = 100, message = "Title must be 3-100 characters"))]
    pub title: String,

    #[validate(length(min = 2, max = 100, message = "Company name must be 2-100 characters"))]
    pub company_name: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: String,

    #[validate(custom(function = "validate_job_type"))]
    pub job_type: String,

    /// Annual salary
    #[validate(range(min = 0, message = "Salary range cannot be negative"))]
    pub salary_range: i64,

    #[validate(length(min = 50, max = 5000, message = "Description must be 50-5000 characters"))]
    pub description: String,

    /// Date in `YYYY-MM-DD` form
    #[validate(custom(function = "validate_deadline"))]
    pub application_deadline: String,
}

impl TryFrom<CreateJobRequest> for JobDraft {
    type Error = ApiError;

    fn try_from(req: CreateJobRequest) -> Result<Self, Self::Error> {
        let job_type = JobType::parse(&req.job_type)
            .ok_or_else(|| ApiError::bad_request("VALIDATION_ERROR", JOB_TYPE_MESSAGE))?;
        let application_deadline = parse_deadline(&req.application_deadline)
            .ok_or_else(|| ApiError::bad_request("VALIDATION_ERROR", DEADLINE_MESSAGE))?;

        Ok(Self {
            title: req.title,
            company_name: req.company_name,
            location: req.location,
            job_type,
            salary_range: req.salary_range,
            description: req.description,
            application_deadline,
        })
    }
}

const JOB_TYPE_MESSAGE: &str = "Job type must be one of: Full-time, Part-time, Contract, Internship";
const DEADLINE_MESSAGE: &str = "Application deadline must be a date in YYYY-MM-DD format";

fn parse_deadline(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DEADLINE_FORMAT).ok()
}

fn validate_job_type(value: &str) -> Result<(), ValidationError> {
    match JobType::parse(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_job_type")
            .with_message(std::borrow::Cow::Borrowed(JOB_TYPE_MESSAGE))),
    }
}

fn validate_deadline(value: &str) -> Result<(), ValidationError> {
    match parse_deadline(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_deadline")
            .with_message(std::borrow::Cow::Borrowed(DEADLINE_MESSAGE))),
    }
}
