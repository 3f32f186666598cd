//! Mapping of imported column values.
//!
//! A raw field may hold one value or several joined by the configured
//! separator. Each part is resolved on its own; parts that cannot be resolved
//! are skipped, and the resolved codes are joined with a comma. When nothing
//! resolves the configured default is used, otherwise the field is dropped.

use tracing::{debug, warn};
use ximport_model::{MappingConfiguration, MatchConfig, Record, Result};

use crate::matcher::resolve;

/// Separator used when joining several resolved codes.
pub const MAPPED_VALUES_SEPARATOR: &str = ",";

/// How a single field was mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueMapping {
    /// At least one part resolved; holds the joined codes.
    Mapped(String),
    /// Nothing resolved and the configured default was used.
    Defaulted(String),
    /// The field was empty or nothing resolved without a default.
    Dropped,
}

impl ValueMapping {
    /// The value to store in the record, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            ValueMapping::Mapped(value) | ValueMapping::Defaulted(value) => Some(value),
            ValueMapping::Dropped => None,
        }
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            ValueMapping::Mapped(value) | ValueMapping::Defaulted(value) => Some(value),
            ValueMapping::Dropped => None,
        }
    }
}

/// Counts of mapped, defaulted and dropped fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingSummary {
    pub mapped: usize,
    pub defaulted: usize,
    pub dropped: usize,
}

impl MappingSummary {
    fn record(&mut self, mapping: &ValueMapping) {
        match mapping {
            ValueMapping::Mapped(_) => self.mapped += 1,
            ValueMapping::Defaulted(_) => self.defaulted += 1,
            ValueMapping::Dropped => self.dropped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.mapped + self.defaulted + self.dropped
    }
}

/// Records after mapping one column, with per-outcome counts.
#[derive(Debug, Clone, Default)]
pub struct MappingOutcome {
    pub records: Vec<Record>,
    pub summary: MappingSummary,
}

/// Split a raw field into the parts that should be resolved.
fn split_values<'a>(raw: &'a str, configuration: &MappingConfiguration) -> Vec<&'a str> {
    match configuration.separator() {
        Some(separator) => raw
            .split(separator)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect(),
        None => vec![raw],
    }
}

/// Map one raw field value.
///
/// # Errors
///
/// Fails only when the configuration's match options are invalid; values
/// that do not resolve are reported through [`ValueMapping`].
pub fn map_field(raw: &str, configuration: &MappingConfiguration) -> Result<ValueMapping> {
    let match_config = configuration.match_config()?;
    Ok(map_parts(raw, match_config.as_ref(), configuration))
}

/// Resolve every part of `raw` with an already validated match config.
///
/// Unresolved parts are logged by position only; the raw text never reaches
/// the log.
fn map_parts(
    raw: &str,
    match_config: Option<&MatchConfig>,
    configuration: &MappingConfiguration,
) -> ValueMapping {
    if raw.trim().is_empty() {
        return ValueMapping::Dropped;
    }

    let mut codes = Vec::new();
    for (index, part) in split_values(raw, configuration).into_iter().enumerate() {
        match resolve(part, match_config, &configuration.value_map) {
            Ok(code) => codes.push(code),
            Err(_) => debug!(part = index, "value part left unmapped"),
        }
    }

    if !codes.is_empty() {
        return ValueMapping::Mapped(codes.join(MAPPED_VALUES_SEPARATOR));
    }
    match &configuration.default {
        Some(default) => ValueMapping::Defaulted(default.clone()),
        None => ValueMapping::Dropped,
    }
}

/// Map one raw field value to the value that should be stored.
///
/// Returns `Ok(None)` when the field should be removed from the record.
pub fn map_value(raw: &str, configuration: &MappingConfiguration) -> Result<Option<String>> {
    map_field(raw, configuration).map(ValueMapping::into_value)
}

/// Map `column` of every record.
///
/// Records without the column are left untouched and are not counted.
/// Mapped values stay at the column's original position; fields that end up
/// [`ValueMapping::Dropped`] are removed from their record.
pub fn map_records(
    records: Vec<Record>,
    column: &str,
    configuration: &MappingConfiguration,
) -> Result<MappingOutcome> {
    let match_config = configuration.match_config()?;

    let mut summary = MappingSummary::default();
    let mut mapped_records = Vec::with_capacity(records.len());
    for mut record in records {
        if let Some(raw) = record.get_mut(column) {
            let mapping = map_parts(raw, match_config.as_ref(), configuration);
            summary.record(&mapping);
            let was_empty = raw.trim().is_empty();
            match mapping.into_value() {
                Some(value) => *raw = value,
                None => {
                    record.shift_remove(column);
                    if !was_empty {
                        warn!(column, "no mapping found, field removed");
                    }
                }
            }
        }
        mapped_records.push(record);
    }

    debug!(
        column,
        mapped = summary.mapped,
        defaulted = summary.defaulted,
        dropped = summary.dropped,
        "column mapped"
    );
    Ok(MappingOutcome {
        records: mapped_records,
        summary,
    })
}
