//! Latency probes.
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │  Prober (trait)                                │
//! │  ├── IcmpProber: one echo request, surge-ping  │
//! │  └── ScriptedProber: canned outcomes           │
//! └────────────────────────────────────────────────┘
//! ```

mod icmp;
mod scripted;

pub use icmp::IcmpProber;
pub use scripted::ScriptedProber;

use async_trait::async_trait;
use fastrelay_types::ProbeError;
use std::net::IpAddr;
use std::time::Duration;

/// Sends a single reachability probe to an address.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Per-probe timeout. Also the latency assigned to a probe that got no reply.
    fn timeout(&self) -> Duration;

    /// Send one echo request.
    ///
    /// `Ok(None)` means the probe ran but no reply arrived in time.
    async fn echo(&self, address: IpAddr) -> Result<Option<Duration>, ProbeError>;
}
