//! HTTP surface: explicit router construction and the error boundary.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::routes;
use crate::storage::Storage;

/// Shared state handed to every route handler.
pub struct AppState {
    pub storage: Storage,
}

/// Build the service router.
///
/// Construction is explicit: the caller owns the router and passes it to
/// the server start call; nothing registers itself process-wide.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/v0/prices",
            get(routes::prices::export_prices).post(routes::prices::import_prices),
        )
        // Uploads are not size-bounded.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Client-facing error: a status code and a plain-text cause description.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let status = match &e {
            ServiceError::CsvNotFound => StatusCode::NOT_FOUND,
            ServiceError::UpstreamQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}
