//! Deterministic prober for tests and dry runs.

use async_trait::async_trait;
use fastrelay_types::ProbeError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::Prober;

/// Replays fixed outcomes per address.
///
/// Addresses without a scripted outcome answer with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedProber {
    timeout: Duration,
    outcomes: HashMap<IpAddr, Result<Option<Duration>, ProbeError>>,
    calls: AtomicUsize,
}

impl ScriptedProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, outcomes: HashMap::new(), calls: AtomicUsize::new(0) }
    }

    /// Reply after `rtt`.
    pub fn reply(mut self, address: IpAddr, rtt: Duration) -> Self {
        self.outcomes.insert(address, Ok(Some(rtt)));
        self
    }

    /// Probe runs, no reply arrives.
    pub fn lost(mut self, address: IpAddr) -> Self {
        self.outcomes.insert(address, Ok(None));
        self
    }

    pub fn fail(mut self, address: IpAddr, error: ProbeError) -> Self {
        self.outcomes.insert(address, Err(error));
        self
    }

    /// Number of echo requests issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn echo(&self, address: IpAddr) -> Result<Option<Duration>, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes.get(&address).cloned().unwrap_or_else(|| {
            Err(ProbeError::Transport {
                address: address.to_string(),
                message: "host unreachable".to_string(),
            })
        })
    }
}
