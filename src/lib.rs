//! `TravelRec` - Travel destination recommendation search
//!
//! This library provides the core functionality for keyword-based
//! destination matching, local-time lookup by country, and the search
//! service behind the HTTP API and CLI.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod localtime;
pub mod matcher;
pub mod models;
pub mod search;
pub mod web;

// Re-export core types for public API
pub use config::TravelRecConfig;
pub use error::TravelRecError;
pub use loader::{CatalogSource, FileCatalogSource, HttpCatalogSource};
pub use matcher::{MatchOutcome, match_keyword};
pub use models::{Catalog, Destination, SearchType};
pub use search::{ResultCard, SearchOutcome, SearchResponse, SearchService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelRecError>;
