//! Catalog snapshot stored on disk.

use async_trait::async_trait;
use fastrelay_types::CandidateServer;
use std::path::{Path, PathBuf};

use crate::error::RetrievalError;
use crate::provider::{parse_catalog, CatalogProvider};

/// Reads a relay catalog saved from the directory (`curl .../relays/wireguard/ > relays.json`).
///
/// The file already holds one server type, so the selector passed to
/// `fetch_catalog` is only logged.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    async fn fetch_catalog(&self, server_type: &str) -> Result<Vec<CandidateServer>, RetrievalError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| RetrievalError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let servers = parse_catalog(&bytes)?;
        tracing::info!(
            path = %self.path.display(),
            server_type,
            relays = servers.len(),
            "Relay catalog loaded from file"
        );
        Ok(servers)
    }
}
