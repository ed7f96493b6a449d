//! Probe-and-rank selection.
//!
//! The latency accumulator is local to each call; a `RelaySelector` holds no
//! state between selections and can be reused freely.

mod engine;


pub use engine::RelaySelector;
