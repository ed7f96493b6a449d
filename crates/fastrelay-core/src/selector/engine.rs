//! RelaySelector implementation.

use fastrelay_types::{CandidateServer, LatencyMeasurement, ProbeError, RankedShortlist};
use std::net::IpAddr;
use std::time::Duration;

use crate::filter::EligibilityFilter;
use crate::probe::Prober;

/// Filters a catalog, probes each eligible candidate in order, ranks by latency.
pub struct RelaySelector<P> {
    prober: P,
}

impl<P: Prober> RelaySelector<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Measure one candidate with a single echo request.
    ///
    /// A probe that ran but got no reply, or reported a zero round trip, is
    /// assigned the probe timeout so a lost packet can never outrank a real
    /// measurement.
    pub async fn probe_latency(&self, candidate: &CandidateServer) -> Result<Duration, ProbeError> {
        let raw = candidate.probe_address();
        let address: IpAddr =
            raw.parse().map_err(|_| ProbeError::InvalidAddress { address: raw.to_string() })?;

        let latency = match self.prober.echo(address).await? {
            Some(rtt) if !rtt.is_zero() => rtt,
            _ => self.prober.timeout(),
        };
        Ok(latency)
    }

    /// Lowest-latency eligible candidate, or `None` if nothing eligible answered.
    ///
    /// Only a strictly lower latency replaces the running best, so the earlier
    /// catalog entry wins a tie.
    pub async fn select_best(
        &self,
        catalog: &[CandidateServer],
        filter: &EligibilityFilter,
    ) -> Option<LatencyMeasurement> {
        let mut scan = Scan::default();
        let mut best: Option<LatencyMeasurement> = None;

        for candidate in filter.eligible(catalog) {
            let Some(rtt) = self.measure(candidate, &mut scan).await else {
                continue;
            };
            if best.as_ref().map_or(true, |b| rtt < b.round_trip_time) {
                best = Some(LatencyMeasurement::success(candidate.clone(), rtt));
            }
        }

        scan.finish(catalog.len());
        if let Some(ref winner) = best {
            tracing::info!(
                hostname = %winner.hostname(),
                rtt_ms = winner.round_trip_ms(),
                "Best relay selected"
            );
        }
        best
    }

    /// The `limit` fastest eligible candidates.
    ///
    /// Every eligible candidate is probed. The result may be shorter than
    /// `limit` (or empty); that is not an error.
    pub async fn select_top_n(
        &self,
        catalog: &[CandidateServer],
        filter: &EligibilityFilter,
        limit: usize,
    ) -> RankedShortlist {
        let mut scan = Scan::default();
        let mut measurements = Vec::new();

        for candidate in filter.eligible(catalog) {
            if let Some(rtt) = self.measure(candidate, &mut scan).await {
                measurements.push(LatencyMeasurement::success(candidate.clone(), rtt));
            }
        }

        scan.finish(catalog.len());
        let shortlist = RankedShortlist::rank(measurements, limit);
        tracing::info!(requested = limit, returned = shortlist.len(), "Relay shortlist ranked");
        shortlist
    }

    async fn measure(&self, candidate: &CandidateServer, scan: &mut Scan) -> Option<Duration> {
        scan.probed += 1;
        match self.probe_latency(candidate).await {
            Ok(rtt) => {
                tracing::debug!(
                    hostname = %candidate.hostname,
                    address = %candidate.probe_address(),
                    rtt_ms = rtt.as_secs_f64() * 1000.0,
                    "Relay latency measured"
                );
                scan.answered += 1;
                Some(rtt)
            },
            Err(error) => {
                tracing::warn!(
                    hostname = %candidate.hostname,
                    address = %candidate.probe_address(),
                    %error,
                    "Probe failed, skipping relay"
                );
                if error.is_environmental() && !scan.hinted {
                    scan.hinted = true;
                    if error.needs_privileges() {
                        tracing::error!(
                            "ICMP sockets are not permitted for this user; allow unprivileged \
                             ping (net.ipv4.ping_group_range) or grant CAP_NET_RAW"
                        );
                    } else {
                        tracing::error!("ICMP socket unavailable; every probe in this run will fail");
                    }
                }
                None
            },
        }
    }
}

/// Per-call probe bookkeeping, used for the summary log line.
#[derive(Debug, Default)]
struct Scan {
    probed: usize,
    answered: usize,
    hinted: bool,
}

impl Scan {
    fn finish(&self, catalog_size: usize) {
        tracing::info!(
            catalog = catalog_size,
            eligible = self.probed,
            answered = self.answered,
            "Relay probe scan complete"
        );
    }
}
