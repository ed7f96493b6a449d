//! Selection run configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

use crate::error::ConfigError;

pub const DEFAULT_SERVER_TYPE: &str = "wireguard";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1000;

/// Settings for one selection run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SelectionConfig {
    /// Relay flavor requested from the directory (e.g. `wireguard`, `openvpn`)
    #[validate(length(min = 1_u64))]
    pub server_type: String,
    /// ISO 3166-1 alpha-2 country code; `None` accepts every country
    #[serde(default)]
    #[validate(length(equal = 2_u64))]
    pub country: Option<String>,
    /// Select diskless (`stboot`) relays instead of disk-backed ones
    #[serde(default)]
    pub diskless_only: bool,
    /// Shortlist size
    #[validate(range(min = 1_usize, max = 500_usize))]
    #[serde(default = "default_count")]
    pub count: usize,
    /// Per-probe ICMP timeout
    #[validate(range(min = 100_u64, max = 30_000_u64))]
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_count() -> usize {
    1
}

fn default_probe_timeout_ms() -> u64 {
    DEFAULT_PROBE_TIMEOUT_MS
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            server_type: DEFAULT_SERVER_TYPE.to_string(),
            country: None,
            diskless_only: false,
            count: default_count(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl SelectionConfig {
    /// Validate field ranges plus the constraints derive macros cannot express.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.server_type.trim().is_empty() || self.server_type.contains('/') {
            return Err(ConfigError::InvalidServerType { value: self.server_type.clone() });
        }
        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Single-best selection instead of a ranked shortlist.
    pub fn wants_single(&self) -> bool {
        self.count == 1
    }
}
