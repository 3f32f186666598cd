//! Data model for external import field mapping.
//!
//! Defines the ordered [`MappingTable`], the typed soft-match options
//! ([`MatchMethod`], [`MatchDirection`], [`MatchConfig`]), the serde-facing
//! [`MappingConfiguration`] and the shared [`MappingError`].

#![deny(unsafe_code)]

use indexmap::IndexMap;

pub mod config;
pub mod error;
pub mod matching;
pub mod table;

pub use config::MappingConfiguration;
pub use error::{MappingError, Result};
pub use matching::{MatchConfig, MatchDirection, MatchMethod};
pub use table::MappingTable;

/// One imported record: column name to raw value, in source column order.
pub type Record = IndexMap<String, String>;
