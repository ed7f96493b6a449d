//! ICMP echo prober.

use async_trait::async_trait;
use fastrelay_types::ProbeError;
use std::io;
use std::net::IpAddr;
use std::time::Duration;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError, ICMP};

use super::Prober;

/// Same payload size as `ping(8)`.
const PAYLOAD_LEN: usize = 56;

/// Sends exactly one ICMP echo request per probe.
///
/// Each probe opens its own socket and drops it on return. Datagram ICMP
/// sockets are tried first so no privileges are needed where the OS allows
/// unprivileged ping; surge-ping falls back to a raw socket otherwise.
#[derive(Debug, Clone)]
pub struct IcmpProber {
    timeout: Duration,
    payload: [u8; PAYLOAD_LEN],
}

impl IcmpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, payload: [0; PAYLOAD_LEN] }
    }

    fn socket_config(address: &IpAddr) -> Config {
        let kind = if address.is_ipv4() { ICMP::V4 } else { ICMP::V6 };
        Config::builder().kind(kind).build()
    }
}

#[async_trait]
impl Prober for IcmpProber {
    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn echo(&self, address: IpAddr) -> Result<Option<Duration>, ProbeError> {
        let client = Client::new(&Self::socket_config(&address)).map_err(socket_error)?;
        let mut pinger = client.pinger(address, PingIdentifier(rand::random())).await;
        pinger.timeout(self.timeout);

        match pinger.ping(PingSequence(0), &self.payload).await {
            Ok((_reply, rtt)) => Ok(Some(rtt)),
            Err(SurgeError::Timeout { .. }) => Ok(None),
            Err(e) => Err(ProbeError::Transport { address: address.to_string(), message: e.to_string() }),
        }
    }
}

fn socket_error(err: io::Error) -> ProbeError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        ProbeError::PermissionDenied { message: err.to_string() }
    } else {
        ProbeError::Socket { message: err.to_string() }
    }
}
