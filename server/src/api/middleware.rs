//! HTTP middleware (CORS, 404 handler)

use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::response::IntoResponse;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::types::ApiError;

/// Allowed CORS origins. An empty list allows any origin.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    pub fn new(origins: &[String]) -> Self {
        Self {
            origins: origins.to_vec(),
        }
    }

    pub fn allows_any(&self) -> bool {
        self.origins.is_empty()
    }

    /// Check if an origin is allowed
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allows_any() || self.origins.iter().any(|o| o == origin)
    }

    fn as_header_values(&self) -> Vec<HeaderValue> {
        self.origins.iter().filter_map(|o| o.parse().ok()).collect()
    }
}

/// Create CORS layer
pub fn cors(allowed: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
        ]);

    // Credentials cannot be combined with a wildcard origin
    if allowed.allows_any() {
        layer.allow_origin(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(allowed.as_header_values()))
            .allow_credentials(true)
    }
}

/// Handle 404 Not Found with logging
pub async fn handle_404(req: Request) -> impl IntoResponse {
    tracing::debug!(method = %req.method(), uri = %req.uri(), "[404] No route");
    ApiError::not_found(
        "NOT_FOUND",
        format!("Route {} {} not found", req.method(), req.uri().path()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_allows_any_origin() {
        let allowed = AllowedOrigins::new(&[]);
        assert!(allowed.allows_any());
        assert!(allowed.is_allowed("http://example.com"));
    }

    #[test]
    fn test_explicit_origins() {
        let allowed = AllowedOrigins::new(&["http://localhost:5173".to_string()]);
        assert!(!allowed.allows_any());
        assert!(allowed.is_allowed("http://localhost:5173"));
        assert!(!allowed.is_allowed("http://localhost:3000"));
    }
}
