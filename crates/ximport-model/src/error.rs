//! Error types for field mapping.

use thiserror::Error;

/// Errors raised while resolving imported values against a mapping table.
#[derive(Debug, Error)]
pub enum MappingError {
    /// No entry of the mapping table matched the input value.
    #[error("unexpected value '{value}': no mapping matched")]
    NoMatch { value: String },

    /// The `matchMethod` option names an unsupported comparison.
    #[error("unknown match method '{value}' (expected 'strpos' or 'stripos')")]
    UnknownMatchMethod { value: String },

    /// The `matchDirection` option names an unsupported direction.
    #[error(
        "unknown match direction '{value}' \
         (expected 'targetContainsInput', 'inputContainsTarget' or 'either')"
    )]
    UnknownMatchDirection { value: String },

    /// The mapping configuration could not be parsed.
    #[error("invalid mapping configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl MappingError {
    /// Returns true for the unresolved-value case, as opposed to a configuration problem.
    pub fn is_no_match(&self) -> bool {
        matches!(self, MappingError::NoMatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
