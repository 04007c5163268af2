//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{self, AllowedOrigins};
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{health, jobs};
use crate::core::CoreApp;
use crate::core::constants::{API_PREFIX, DEFAULT_BODY_LIMIT};
use crate::data::TransactionalService;
use crate::domain::jobs::{JobCreationService, JobSearchService};

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(&app.config.server.cors_origins);
        Self {
            app,
            allowed_origins,
        }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let shutdown = app.shutdown.clone();
        let addr = SocketAddr::new(app.config.server.host.parse()?, app.config.server.port);

        let router = build_router(
            app.database.clone(),
            app.job_search.clone(),
            app.job_creation.clone(),
            &allowed_origins,
        );

        let listener = TcpListener::bind(addr).await?;
        tracing::debug!(%addr, "Listening");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}

/// Assemble the full HTTP router
pub fn build_router(
    database: Arc<TransactionalService>,
    job_search: Arc<JobSearchService>,
    job_creation: Arc<JobCreationService>,
    allowed_origins: &AllowedOrigins,
) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .with_state(database);

    let api = Router::new()
        .merge(health_routes)
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui_html))
        .route("/docs/", get(swagger_ui_html))
        .nest("/job", jobs::routes(job_search, job_creation));

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(middleware::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
}
