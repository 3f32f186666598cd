//! Exact and soft matching of imported field values.
//!
//! [`match_single_field`] resolves one value by substring matching against
//! the labels of a [`MappingTable`](ximport_model::MappingTable);
//! [`map_records`] applies a full column
//! [`MappingConfiguration`](ximport_model::MappingConfiguration) to imported
//! records, including defaults and multi-value fields.

#![deny(unsafe_code)]

pub mod matcher;
pub mod records;

pub use matcher::{match_exact, match_single_field, resolve};
pub use records::{
    MAPPED_VALUES_SEPARATOR, MappingOutcome, MappingSummary, ValueMapping, map_field,
    map_records, map_value,
};
