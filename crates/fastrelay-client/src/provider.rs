//! Catalog provider seam.

use async_trait::async_trait;
use fastrelay_types::CandidateServer;
use std::collections::HashSet;

use crate::error::RetrievalError;

/// Source of the relay catalog for one server type.
///
/// Implementations return the full catalog in directory order. They do not
/// filter and do not retry.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_catalog(&self, server_type: &str) -> Result<Vec<CandidateServer>, RetrievalError>;
}

/// Decode a directory payload (JSON array of relay records).
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<CandidateServer>, RetrievalError> {
    let servers: Vec<CandidateServer> =
        serde_json::from_slice(bytes).map_err(|e| RetrievalError::Malformed(e.to_string()))?;

    let mut seen = HashSet::with_capacity(servers.len());
    for server in &servers {
        if !seen.insert(server.hostname.as_str()) {
            tracing::warn!(hostname = %server.hostname, "Duplicate hostname in catalog");
        }
    }

    Ok(servers)
}
