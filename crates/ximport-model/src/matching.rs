//! Typed match options.
//!
//! Import configurations describe soft matching with two loosely typed
//! options: `matchMethod` (`"strpos"` or `"stripos"`) and the boolean
//! `matchSymmetric`. Both are parsed once into [`MatchMethod`] and
//! [`MatchDirection`] so the matcher never dispatches on strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MappingError;

/// Substring comparison used for soft matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Case-sensitive substring search.
    Strpos,
    /// Case-insensitive substring search.
    Stripos,
}

impl MatchMethod {
    /// Returns the configuration name of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::Strpos => "strpos",
            MatchMethod::Stripos => "stripos",
        }
    }

    /// Returns true if `needle` occurs in `haystack` under this method.
    pub fn contains(&self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchMethod::Strpos => haystack.contains(needle),
            MatchMethod::Stripos => haystack.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchMethod {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strpos" => Ok(MatchMethod::Strpos),
            "stripos" => Ok(MatchMethod::Stripos),
            _ => Err(MappingError::UnknownMatchMethod {
                value: s.to_string(),
            }),
        }
    }
}

/// Which side of the comparison must contain the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchDirection {
    /// The table label must contain the input value (`matchSymmetric = false`).
    #[default]
    TargetContainsInput,
    /// The input value must contain the table label (`matchSymmetric = true`).
    InputContainsTarget,
    /// Either containment is accepted; label-contains-input is tried first.
    Either,
}

impl MatchDirection {
    /// Maps the legacy `matchSymmetric` flag onto a direction.
    pub fn from_symmetric(symmetric: bool) -> Self {
        if symmetric {
            MatchDirection::InputContainsTarget
        } else {
            MatchDirection::TargetContainsInput
        }
    }

    /// Returns the configuration name of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchDirection::TargetContainsInput => "targetContainsInput",
            MatchDirection::InputContainsTarget => "inputContainsTarget",
            MatchDirection::Either => "either",
        }
    }
}

impl fmt::Display for MatchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchDirection {
    type Err = MappingError;

    /// Accepts the camelCase names as well as kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| *ch != '-' && *ch != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "targetcontainsinput" => Ok(MatchDirection::TargetContainsInput),
            "inputcontainstarget" => Ok(MatchDirection::InputContainsTarget),
            "either" => Ok(MatchDirection::Either),
            _ => Err(MappingError::UnknownMatchDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// Validated soft-match settings handed to the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchConfig {
    pub method: MatchMethod,
    pub direction: MatchDirection,
}

impl MatchConfig {
    pub fn new(method: MatchMethod, direction: MatchDirection) -> Self {
        Self { method, direction }
    }

    /// Builds a config from the legacy `matchSymmetric` flag.
    pub fn symmetric(method: MatchMethod, symmetric: bool) -> Self {
        Self::new(method, MatchDirection::from_symmetric(symmetric))
    }
}
