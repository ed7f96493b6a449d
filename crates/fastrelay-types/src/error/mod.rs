//! Typed error definitions for fastrelay.
//!
//! Catalog retrieval errors live with the catalog provider in
//! `fastrelay-client`; everything the engine and the binary share is here.

mod config;
mod probe;

pub use config::ConfigError;
pub use probe::ProbeError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a selection that produced nothing usable.
///
/// This is a negative result, not an engine fault: the catalog was fetched
/// but no candidate both passed the filters and answered a probe.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SelectionError {
    /// No candidate passed the filters and produced a successful probe
    #[error("No eligible relay: {eligible} of {catalog_size} candidates passed the filters, none answered a probe")]
    NoEligibleResult { catalog_size: usize, eligible: usize },
}
