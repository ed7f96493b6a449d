//! Probe-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that prevent a single latency probe from running.
///
/// A lost reply is not an error; see `ProbeLatency` in `fastrelay-core`.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ProbeError {
    /// Probe address is empty or not an IP literal
    #[error("Invalid probe address '{address}'")]
    InvalidAddress { address: String },

    /// The OS refused to open an ICMP socket
    #[error("Permission denied opening ICMP socket: {message}")]
    PermissionDenied { message: String },

    /// ICMP socket could not be created for another reason
    #[error("Failed to open ICMP socket: {message}")]
    Socket { message: String },

    /// Echo request failed in flight (send error, malformed reply, ...)
    #[error("Probe to {address} failed: {message}")]
    Transport { address: String, message: String },
}

impl ProbeError {
    /// Whether retrying with elevated privileges could help.
    ///
    /// Unprivileged ICMP sockets are gated by `net.ipv4.ping_group_range` on
    /// Linux; raw sockets need `CAP_NET_RAW`.
    pub fn needs_privileges(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Whether every subsequent probe in the run will fail the same way.
    pub fn is_environmental(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. } | Self::Socket { .. })
    }
}
