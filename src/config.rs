//! Environment-driven configuration.
//!
//! Connection parameters for the backing store come from the `POSTGRES_*`
//! variables; the listen address from `SERVER_ADDR`. No other runtime
//! configuration exists.

use std::env;

use crate::error::{Result, ServiceError};

/// Listen address used when `SERVER_ADDR` is not set.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Connection parameters for the PostgreSQL store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl StorageConfig {
    /// Read the configuration from `POSTGRES_HOST`, `POSTGRES_PORT`,
    /// `POSTGRES_USER`, `POSTGRES_PASSWORD` and `POSTGRES_DB`.
    ///
    /// A missing variable fails fast with [`ServiceError::Config`] rather
    /// than surfacing later as an opaque connect failure.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: require("POSTGRES_HOST")?,
            port: require("POSTGRES_PORT")?,
            user: require("POSTGRES_USER")?,
            password: require("POSTGRES_PASSWORD")?,
            database: require("POSTGRES_DB")?,
        })
    }

    /// Assemble the connection URL for the pool.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// Listen address for the HTTP server.
pub fn server_addr() -> String {
    env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string())
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| ServiceError::Config(format!("missing environment variable {name}")))
}
