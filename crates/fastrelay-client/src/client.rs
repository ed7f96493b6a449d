use crate::error::RetrievalError;
use crate::provider::{parse_catalog, CatalogProvider};
use crate::types::CatalogConfig;
use async_trait::async_trait;
use fastrelay_types::CandidateServer;
use reqwest::Client;
use std::time::Duration;
use url::Url;
use validator::Validate;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the relay directory.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, RetrievalError> {
        config.validate().map_err(|e| RetrievalError::InvalidUrl(e.to_string()))?;
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("fastrelay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// `{base_url}/{server_type}/`
    pub fn catalog_url(&self, server_type: &str) -> Result<Url, RetrievalError> {
        if server_type.is_empty()
            || !server_type.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(RetrievalError::InvalidUrl(format!(
                "server type '{}' is not a single path segment",
                server_type
            )));
        }
        self.base_url
            .join(&format!("{}/", server_type))
            .map_err(|e| RetrievalError::InvalidUrl(e.to_string()))
    }

    pub async fn fetch(&self, server_type: &str) -> Result<Vec<CandidateServer>, RetrievalError> {
        let url = self.catalog_url(server_type)?;
        tracing::debug!(%url, "Fetching relay catalog");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let bytes = resp.bytes().await?;
        let servers = parse_catalog(&bytes)?;
        tracing::info!(server_type, relays = servers.len(), "Relay catalog fetched");
        Ok(servers)
    }
}

#[async_trait]
impl CatalogProvider for CatalogClient {
    async fn fetch_catalog(&self, server_type: &str) -> Result<Vec<CandidateServer>, RetrievalError> {
        self.fetch(server_type).await
    }
}

/// Directory roots are joined against, so they need a trailing slash.
fn parse_base_url(raw: &str) -> Result<Url, RetrievalError> {
    let trimmed = raw.trim();
    let normalized =
        if trimmed.ends_with('/') { trimmed.to_string() } else { format!("{}/", trimmed) };
    let url = Url::parse(&normalized)
        .map_err(|e| RetrievalError::InvalidUrl(format!("'{}': {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RetrievalError::InvalidUrl(format!("unsupported scheme '{}'", other))),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> CatalogClient {
        CatalogClient::new(CatalogConfig { base_url: base_url.to_string(), timeout_secs: 5 })
            .unwrap()
    }

    #[test]
    fn test_default_catalog_url() {
        let client = CatalogClient::new(CatalogConfig::default()).unwrap();
        assert_eq!(
            client.catalog_url("wireguard").unwrap().as_str(),
            "https://api.mullvad.net/www/relays/wireguard/"
        );
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let client = client_for("http://localhost:8080/relays");
        assert_eq!(
            client.catalog_url("openvpn").unwrap().as_str(),
            "http://localhost:8080/relays/openvpn/"
        );
    }

    #[test]
    fn test_rejects_path_traversal_in_server_type() {
        let client = client_for("http://localhost:8080/relays/");
        assert!(matches!(client.catalog_url("../admin"), Err(RetrievalError::InvalidUrl(_))));
        assert!(matches!(client.catalog_url(""), Err(RetrievalError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = CatalogConfig { base_url: "ftp://relays".to_string(), timeout_secs: 5 };
        assert!(matches!(CatalogClient::new(config), Err(RetrievalError::InvalidUrl(_))));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
