//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{health, jobs};
use crate::data::types::{JobRecord, JobType};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "JobBoard API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Job postings with filtered search"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "jobs", description = "Job listing and creation")
    ),
    paths(
        health::health,
        jobs::list_jobs,
        jobs::create_job,
    ),
    components(schemas(
        health::HealthResponse,
        JobType,
        JobRecord,
        jobs::types::JobListQuery,
        jobs::types::CreateJobRequest,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>JobBoard API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body style="margin: 0">
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [SwaggerUIBundle.presets.apis],
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_job_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/job/all-jobs"));
        assert!(doc.paths.paths.contains_key("/api/job/create-job"));
        assert!(doc.paths.paths.contains_key("/api/health"));
    }
}
