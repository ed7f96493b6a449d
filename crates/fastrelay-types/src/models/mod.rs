//! Domain models for relay selection.

mod measurement;
mod server;
mod shortlist;

pub use measurement::LatencyMeasurement;
pub use server::CandidateServer;
pub use shortlist::RankedShortlist;
