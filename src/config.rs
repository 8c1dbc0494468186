// ABOUTME: Explicit storage configuration loaded from environment variables
// ABOUTME: The backend decision is made once at startup, never per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Configuration
//!
//! An explicit [`StorageConfig`] is passed into the storage constructor; no
//! module-level state decides which backend handles a call. The remote store
//! is considered configured only when both its URL and API key are set to real
//! values - the placeholder strings from a sample config count as
//! unconfigured.

use std::env;

/// Placeholder values that mean "remote store not set up"
const PLACEHOLDER_API_URL: &str = "YOUR_MONGODB_API_URL";
const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Connection settings for the remote document-store HTTP API
#[derive(Debug, Clone)]
pub struct RemoteStoreConfig {
    /// Data API base URL, e.g. `https://data.mongodb-api.com/app/xxx/endpoint/data/v1`
    pub api_url: String,
    /// API key sent in the `api-key` header
    pub api_key: String,
    /// Cluster name (`dataSource` in the request body)
    pub data_source: String,
    /// Database name
    pub database: String,
}

impl RemoteStoreConfig {
    fn is_configured(&self) -> bool {
        !self.api_url.is_empty()
            && !self.api_key.is_empty()
            && self.api_url != PLACEHOLDER_API_URL
            && self.api_key != PLACEHOLDER_API_KEY
    }
}

/// Complete storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// SQLite URL for the local key-value store, e.g. `sqlite:gamechanger.db`
    pub database_url: String,
    /// Remote store settings; `None` routes everything to local storage
    pub remote: Option<RemoteStoreConfig>,
}

impl StorageConfig {
    /// Local-only configuration, the default for development and tests
    pub fn local_only(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            remote: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `GAMECHANGER_DATABASE_URL` (default `sqlite:gamechanger.db`),
    /// and for the remote store `MONGODB_DATA_API_URL`, `MONGODB_DATA_API_KEY`,
    /// `MONGODB_DATA_SOURCE`, and `MONGODB_DATABASE`.
    pub fn from_env() -> Self {
        let database_url =
            env::var("GAMECHANGER_DATABASE_URL").unwrap_or_else(|_| "sqlite:gamechanger.db".into());

        let remote = match (
            env::var("MONGODB_DATA_API_URL"),
            env::var("MONGODB_DATA_API_KEY"),
        ) {
            (Ok(api_url), Ok(api_key)) => {
                let config = RemoteStoreConfig {
                    api_url,
                    api_key,
                    data_source: env::var("MONGODB_DATA_SOURCE")
                        .unwrap_or_else(|_| "Cluster0".into()),
                    database: env::var("MONGODB_DATABASE")
                        .unwrap_or_else(|_| "game_changer".into()),
                };
                config.is_configured().then_some(config)
            }
            _ => None,
        };

        Self {
            database_url,
            remote,
        }
    }
}
