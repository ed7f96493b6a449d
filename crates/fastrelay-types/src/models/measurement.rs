//! Result of probing one candidate.

use serde::{Serialize, Serializer};
use std::time::Duration;

use super::server::CandidateServer;

/// Outcome of one latency probe.
///
/// `round_trip_time` only carries meaning when `succeeded` is true; failed
/// measurements never make it into a [`RankedShortlist`](super::RankedShortlist).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencyMeasurement {
    pub server: CandidateServer,
    #[serde(rename = "round_trip_ms", serialize_with = "serialize_millis")]
    pub round_trip_time: Duration,
    pub succeeded: bool,
}

impl LatencyMeasurement {
    pub fn success(server: CandidateServer, round_trip_time: Duration) -> Self {
        Self { server, round_trip_time, succeeded: true }
    }

    pub fn failure(server: CandidateServer) -> Self {
        Self { server, round_trip_time: Duration::ZERO, succeeded: false }
    }

    pub fn hostname(&self) -> &str {
        &self.server.hostname
    }

    /// Round-trip time in fractional milliseconds.
    pub fn round_trip_ms(&self) -> f64 {
        as_millis_f64(self.round_trip_time)
    }
}

fn serialize_millis<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(as_millis_f64(*value))
}

fn as_millis_f64(value: Duration) -> f64 {
    value.as_nanos() as f64 / 1_000_000.0
}
