use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Json};

use crate::export;
use crate::ingest;
use crate::models::IngestStats;
use crate::server::{ApiError, AppState};

/// POST /api/v0/prices
///
/// Body: zip archive holding one `.csv` file. Responds with the ingestion
/// stats as JSON, or a plain-text error (404 when the archive has no CSV
/// entry, 400 otherwise).
pub async fn import_prices(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<IngestStats>, ApiError> {
    let stats = ingest::ingest(&state.storage, body.to_vec()).await?;
    Ok(Json(stats))
}

/// GET /api/v0/prices
///
/// Responds with a zip archive (`prices.zip`) holding the full table as
/// `data.csv`, or 500 when the listing query fails.
pub async fn export_prices(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = export::export(&state.storage).await?;
    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export::ARCHIVE_FILE_NAME),
        ),
    ];
    Ok((headers, body))
}
