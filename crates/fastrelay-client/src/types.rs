use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_DIRECTORY_URL: &str = "https://api.mullvad.net/www/relays/";

/// Directory endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CatalogConfig {
    /// Directory root; the server type is appended as a path segment
    pub base_url: String,
    /// Whole-request timeout
    #[validate(range(min = 1_u64, max = 600_u64))]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_DIRECTORY_URL.to_string(), timeout_secs: 30 }
    }
}
