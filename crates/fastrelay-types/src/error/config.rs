//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating run settings.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// One or more fields failed validation
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    /// Server type selector cannot be used in a catalog URL
    #[error("Invalid server type '{value}': must be non-empty and must not contain '/'")]
    InvalidServerType { value: String },
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Invalid { message: errors.to_string() }
    }
}
