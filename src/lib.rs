//! HTTP service importing and exporting price records as zip-compressed CSV.
//!
//! `POST /api/v0/prices` takes a zip archive holding one `.csv` file,
//! persists every row in a single transaction, and answers with aggregate
//! statistics. `GET /api/v0/prices` runs the inverse pipeline: the full
//! table is serialized to CSV, zipped, and streamed back as `prices.zip`.
//! Records live in a PostgreSQL `prices` table; each request runs
//! start-to-finish on its own task with no cross-request state beyond the
//! connection pool.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use prices_api::config::StorageConfig;
//! use prices_api::{router, AppState, Storage};
//!
//! #[tokio::main]
//! async fn main() -> prices_api::Result<()> {
//!     let config = StorageConfig::from_env()?;
//!     let storage = Storage::connect(&config).await?;
//!     storage.ensure_schema().await?;
//!
//!     let app = router(Arc::new(AppState { storage }));
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod records;
pub mod routes;
pub mod server;
pub mod storage;

pub use error::{Result, ServiceError};
pub use models::{IngestStats, PriceRecord, StoredPrice};
pub use server::{router, AppState};
pub use storage::Storage;
