//! Job API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::types::{ApiError, ApiResponse};
use crate::data::types::{JobDraft, JobRecord};
use crate::domain::jobs::{JobCreationService, JobSearchService};

use types::{CreateJobRequest, JobListQuery};

/// Shared state for Job API endpoints
#[derive(Clone)]
pub struct JobsApiState {
    pub search: Arc<JobSearchService>,
    pub creation: Arc<JobCreationService>,
}

/// Build Job API routes
pub fn routes(search: Arc<JobSearchService>, creation: Arc<JobCreationService>) -> Router<()> {
    let state = JobsApiState { search, creation };

    Router::new()
        .route("/all-jobs", get(list_jobs))
        .route("/create-job", post(create_job))
        .with_state(state)
}

/// List jobs matching the optional filters, newest first
#[utoipa::path(
    get,
    path = "/api/job/all-jobs",
    tag = "jobs",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive title substring"),
        ("location" = Option<String>, Query, description = "Case-insensitive location substring"),
        ("jobType" = Option<String>, Query, description = "Full-time, Part-time, Contract or Internship"),
        ("minSalary" = Option<i64>, Query, description = "Lower bound, thousands per month"),
        ("maxSalary" = Option<i64>, Query, description = "Upper bound, thousands per month")
    ),
    responses(
        (status = 200, description = "Matching jobs wrapped in the success envelope", body = [JobRecord]),
        (status = 400, description = "Invalid filter value"),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn list_jobs(
    State(state): State<JobsApiState>,
    ValidatedQuery(query): ValidatedQuery<JobListQuery>,
) -> Result<Json<ApiResponse<Vec<JobRecord>>>, ApiError> {
    let filters = query.to_filters()?;
    let jobs = state.search.search(&filters).await?;

    Ok(Json(ApiResponse::ok("Jobs fetched successfully", jobs)))
}

/// Create a job posting
#[utoipa::path(
    post,
    path = "/api/job/create-job",
    tag = "jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Created job wrapped in the success envelope", body = JobRecord),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn create_job(
    State(state): State<JobsApiState>,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<JobRecord>>), ApiError> {
    let draft = JobDraft::try_from(req)?;
    let job = state.creation.create(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Job Created Successfully", job)),
    ))
}
