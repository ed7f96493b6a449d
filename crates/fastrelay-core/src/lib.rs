//! # fastrelay Core
//!
//! Selection engine: turns an unordered relay catalog into a latency-ranked
//! shortlist.
//!
//! ```text
//! catalog ──► EligibilityFilter ──► Prober (one ICMP echo each) ──► RankedShortlist
//! ```
//!
//! Probes run one at a time in catalog order. A failed probe drops that
//! candidate and the scan continues; nothing in here is fatal.

#![cfg_attr(test, allow(clippy::panic, clippy::float_cmp, clippy::unwrap_used))]

pub mod filter;
pub mod probe;
pub mod selector;

pub use filter::EligibilityFilter;
pub use probe::{IcmpProber, Prober, ScriptedProber};
pub use selector::RelaySelector;
