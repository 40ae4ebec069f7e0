//! Data models for the destination catalog

pub mod catalog;
pub mod destination;

// Re-export commonly used types from submodules
pub use catalog::{Catalog, CountryEntry, FlatCatalog, GroupedCatalog};
pub use destination::{Destination, SearchType};
