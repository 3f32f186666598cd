//! Per-column mapping configuration.
//!
//! A [`MappingConfiguration`] mirrors the options an import configuration
//! attaches to a column: the inline value map plus the optional soft-match,
//! default and multi-value settings. The match options are kept as raw
//! strings and validated by [`MappingConfiguration::match_config`], so a
//! misspelled method is reported as a [`MappingError`](crate::MappingError) rather than silently
//! falling back to exact matching.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matching::{MatchConfig, MatchDirection, MatchMethod};
use crate::table::MappingTable;

/// Mapping options for a single imported column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingConfiguration {
    /// Label-to-code table consulted for every value.
    pub value_map: MappingTable,

    /// Soft-match method (`strpos` or `stripos`). Exact key matching when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_method: Option<String>,

    /// Legacy symmetry flag: when true the input must contain the label.
    #[serde(default)]
    pub match_symmetric: bool,

    /// Explicit direction; takes precedence over `match_symmetric`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_direction: Option<String>,

    /// Value stored when nothing in the field could be mapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Separator for fields holding several values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_values_separator: Option<String>,
}

impl MappingConfiguration {
    /// Exact-match configuration over `value_map`.
    pub fn new(value_map: MappingTable) -> Self {
        Self {
            value_map,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_match_method(mut self, method: impl Into<String>) -> Self {
        self.match_method = Some(method.into());
        self
    }

    #[must_use]
    pub fn with_match_symmetric(mut self, symmetric: bool) -> Self {
        self.match_symmetric = symmetric;
        self
    }

    #[must_use]
    pub fn with_match_direction(mut self, direction: impl Into<String>) -> Self {
        self.match_direction = Some(direction.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn with_multiple_values_separator(mut self, separator: impl Into<String>) -> Self {
        self.multiple_values_separator = Some(separator.into());
        self
    }

    /// Parse a configuration from JSON and validate its match options.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON reader and validate its match options.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the match options name supported values.
    pub fn validate(&self) -> Result<()> {
        self.match_config().map(|_| ())
    }

    /// Typed soft-match settings, or `None` when exact matching applies.
    ///
    /// A blank `matchMethod` counts as absent. A direction given without a
    /// method is still validated even though it has no effect.
    pub fn match_config(&self) -> Result<Option<MatchConfig>> {
        let direction = match self.match_direction.as_deref() {
            Some(raw) => raw.parse::<MatchDirection>()?,
            None => MatchDirection::from_symmetric(self.match_symmetric),
        };
        let method = match self.match_method.as_deref().map(str::trim) {
            None | Some("") => return Ok(None),
            Some(raw) => raw.parse::<MatchMethod>()?,
        };
        Ok(Some(MatchConfig::new(method, direction)))
    }

    /// The multi-value separator, ignoring an empty string.
    pub fn separator(&self) -> Option<&str> {
        self.multiple_values_separator
            .as_deref()
            .filter(|separator| !separator.is_empty())
    }
}
