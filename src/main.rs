use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use prices_api::config::{self, StorageConfig};
use prices_api::server::{router, AppState};
use prices_api::storage::Storage;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StorageConfig::from_env().expect("storage configuration");
    let storage = Storage::connect(&config)
        .await
        .expect("connect to PostgreSQL");
    storage.ensure_schema().await.expect("ensure prices schema");

    let app = router(Arc::new(AppState { storage }));

    let addr = config::server_addr();
    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("bind listen address");
    axum::serve(listener, app).await.expect("serve HTTP");
}
