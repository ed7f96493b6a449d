//! Latency-ranked selection output.

use serde::Serialize;

use super::measurement::LatencyMeasurement;

/// Successful measurements ordered by ascending round-trip time.
///
/// Ordering is stable: candidates with equal latency keep the order in which
/// they appeared in the catalog. Failed measurements are never admitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RankedShortlist {
    entries: Vec<LatencyMeasurement>,
}

impl RankedShortlist {
    /// Rank `measurements` (given in catalog order) and keep the best `limit`.
    pub fn rank(measurements: Vec<LatencyMeasurement>, limit: usize) -> Self {
        let mut entries: Vec<LatencyMeasurement> =
            measurements.into_iter().filter(|m| m.succeeded).collect();
        // sort_by_key is stable
        entries.sort_by_key(|m| m.round_trip_time);
        entries.truncate(limit);
        Self { entries }
    }

    pub fn best(&self) -> Option<&LatencyMeasurement> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LatencyMeasurement> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[LatencyMeasurement] {
        &self.entries
    }

    pub fn hostnames(&self) -> Vec<&str> {
        self.entries.iter().map(LatencyMeasurement::hostname).collect()
    }

    pub fn into_vec(self) -> Vec<LatencyMeasurement> {
        self.entries
    }
}

impl IntoIterator for RankedShortlist {
    type Item = LatencyMeasurement;
    type IntoIter = std::vec::IntoIter<LatencyMeasurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedShortlist {
    type Item = &'a LatencyMeasurement;
    type IntoIter = std::slice::Iter<'a, LatencyMeasurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::CandidateServer;
    use std::time::Duration;

    fn ok(hostname: &str, ms: u64) -> LatencyMeasurement {
        LatencyMeasurement::success(
            CandidateServer::new(hostname, "ch", "10.0.0.1"),
            Duration::from_millis(ms),
        )
    }

    fn failed(hostname: &str) -> LatencyMeasurement {
        LatencyMeasurement::failure(CandidateServer::new(hostname, "ch", "10.0.0.1"))
    }

    #[test]
    fn test_orders_ascending() {
        let shortlist = RankedShortlist::rank(vec![ok("a", 50), ok("b", 20), ok("c", 35)], 10);

        assert_eq!(shortlist.hostnames(), vec!["b", "c", "a"]);
        assert_eq!(shortlist.best().unwrap().hostname(), "b");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let shortlist =
            RankedShortlist::rank(vec![ok("x", 30), ok("y", 10), ok("z", 30), ok("w", 10)], 4);

        assert_eq!(shortlist.hostnames(), vec!["y", "w", "x", "z"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let shortlist = RankedShortlist::rank(vec![ok("a", 3), ok("b", 2), ok("c", 1)], 2);

        assert_eq!(shortlist.len(), 2);
        assert_eq!(shortlist.hostnames(), vec!["c", "b"]);
    }

    #[test]
    fn test_excludes_failed_measurements() {
        let shortlist = RankedShortlist::rank(vec![failed("lost"), ok("a", 40)], 5);

        assert_eq!(shortlist.hostnames(), vec!["a"]);
        assert!(shortlist.iter().all(|m| m.succeeded));
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let shortlist = RankedShortlist::rank(vec![ok("a", 1)], 0);
        assert!(shortlist.is_empty());
        assert!(shortlist.best().is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let shortlist = RankedShortlist::rank(vec![ok("a", 7)], 1);

        let json = serde_json::to_value(&shortlist).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["server"]["hostname"], "a");
    }
}
