#![doc = include_str!("../README.md")]

mod client;
mod error;
mod file;
mod provider;
mod types;

pub use client::CatalogClient;
pub use error::RetrievalError;
pub use file::FileCatalog;
pub use provider::{parse_catalog, CatalogProvider};
pub use types::*;
