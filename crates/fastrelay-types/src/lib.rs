//! # fastrelay Types
//!
//! Core types, models, and error definitions for fastrelay.
//!
//! - **`error`** - Typed errors for probing, selection and configuration
//! - **`models`** - Domain models (CandidateServer, LatencyMeasurement, RankedShortlist)
//! - **`config`** - Validated selection settings
//!
//! ## Architecture Role
//!
//! `fastrelay-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                fastrelay-types (this crate)
//!                        │
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!   fastrelay-client            fastrelay-core
//!          │                           │
//!          └─────────────┬─────────────┘
//!                        ▼
//!                  fastrelay-cli
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use config::SelectionConfig;
pub use error::{ConfigError, ProbeError, SelectionError};
pub use models::{CandidateServer, LatencyMeasurement, RankedShortlist};
