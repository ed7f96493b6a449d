#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::unwrap_used, reason = "integration test — panics are the assertion mechanism")]

//! Shortlist invariants over seeded random catalogs.

use fastrelay_core::{EligibilityFilter, RelaySelector, ScriptedProber};
use fastrelay_types::{CandidateServer, ProbeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(1000);

struct Fixture {
    catalog: Vec<CandidateServer>,
    prober: ScriptedProber,
    /// Hostnames whose probe produces a usable measurement
    answering: Vec<String>,
}

fn random_fixture(rng: &mut StdRng, size: u16) -> Fixture {
    let mut catalog = Vec::new();
    let mut prober = ScriptedProber::new(TIMEOUT);
    let mut answering = Vec::new();

    for i in 0..size {
        let address = IpAddr::V4(Ipv4Addr::new(10, 1, (i >> 8) as u8, (i & 0xff) as u8));
        let mut server =
            CandidateServer::new(format!("relay-{i:03}"), ["ch", "se", "de"][i as usize % 3], address.to_string());
        server.active = rng.gen_bool(0.8);
        server.diskless = rng.gen_bool(0.5);

        // Coarse latencies so ties are common
        prober = match rng.gen_range(0..5) {
            0 => prober.fail(
                address,
                ProbeError::Transport { address: address.to_string(), message: "down".into() },
            ),
            1 => {
                answering.push(server.hostname.clone());
                prober.lost(address)
            }
            _ => {
                answering.push(server.hostname.clone());
                prober.reply(address, Duration::from_millis(rng.gen_range(1..6) * 10))
            }
        };
        catalog.push(server);
    }

    Fixture { catalog, prober, answering }
}

#[tokio::test]
async fn test_shortlist_invariants_hold_for_random_catalogs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..50 {
        let size = rng.gen_range(0..40);
        let limit = rng.gen_range(1..12);
        let filter = EligibilityFilter::new(
            [None, Some("ch"), Some("se")][round % 3],
            rng.gen_bool(0.5),
        );
        let fixture = random_fixture(&mut rng, size);
        let selector = RelaySelector::new(fixture.prober);

        let shortlist = selector.select_top_n(&fixture.catalog, &filter, limit).await;

        let usable: Vec<&CandidateServer> = filter
            .eligible(&fixture.catalog)
            .filter(|s| fixture.answering.contains(&s.hostname))
            .collect();

        assert!(shortlist.len() <= limit.min(usable.len()), "round {round}: too long");
        assert_eq!(shortlist.len(), limit.min(usable.len()), "round {round}: dropped usable relays");

        for entry in &shortlist {
            assert!(filter.accepts(&entry.server), "round {round}: ineligible {}", entry.hostname());
            assert!(entry.succeeded);
            assert!(!entry.round_trip_time.is_zero());
            assert!(entry.round_trip_time <= TIMEOUT);
        }

        let position = |hostname: &str| {
            fixture.catalog.iter().position(|s| s.hostname == hostname).unwrap()
        };
        for pair in shortlist.as_slice().windows(2) {
            assert!(pair[0].round_trip_time <= pair[1].round_trip_time, "round {round}: unsorted");
            if pair[0].round_trip_time == pair[1].round_trip_time {
                assert!(
                    position(pair[0].hostname()) < position(pair[1].hostname()),
                    "round {round}: tie broke catalog order"
                );
            }
        }

        let best = selector.select_best(&fixture.catalog, &filter).await;
        assert_eq!(best.as_ref(), shortlist.best(), "round {round}: best disagrees with shortlist");

        let again = selector.select_top_n(&fixture.catalog, &filter, limit).await;
        assert_eq!(again, shortlist, "round {round}: not idempotent");
    }
}
