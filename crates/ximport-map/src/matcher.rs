//! Resolution of single values against a mapping table.

use tracing::{debug, trace};
use ximport_model::{MappingError, MappingTable, MatchConfig, MatchDirection, Result};

/// Resolve `input` by soft matching against the labels of `table`.
///
/// Entries are tested in table order and the code of the first label that
/// satisfies `config` is returned:
///
/// - [`MatchDirection::TargetContainsInput`]: the label contains `input`.
/// - [`MatchDirection::InputContainsTarget`]: `input` contains the label.
/// - [`MatchDirection::Either`]: either of the above, label first.
///
/// Case sensitivity follows `config.method`.
///
/// # Errors
///
/// Returns [`MappingError::NoMatch`] when no label qualifies or `input` is
/// empty.
pub fn match_single_field<'t>(
    input: &str,
    config: &MatchConfig,
    table: &'t MappingTable,
) -> Result<&'t str> {
    if input.is_empty() {
        return Err(no_match(input));
    }
    let method = config.method;
    for (label, code) in table.iter() {
        let matched = match config.direction {
            MatchDirection::TargetContainsInput => method.contains(label, input),
            MatchDirection::InputContainsTarget => method.contains(input, label),
            MatchDirection::Either => {
                method.contains(label, input) || method.contains(input, label)
            }
        };
        trace!(label, matched, "soft match candidate");
        if matched {
            debug!(
                method = %method,
                direction = %config.direction,
                label,
                code,
                "soft match resolved"
            );
            return Ok(code);
        }
    }
    Err(no_match(input))
}

/// Resolve `input` by exact label lookup.
///
/// # Errors
///
/// Returns [`MappingError::NoMatch`] when `input` is not a label of `table`.
pub fn match_exact<'t>(input: &str, table: &'t MappingTable) -> Result<&'t str> {
    table.get(input).ok_or_else(|| no_match(input))
}

/// Resolve `input` with soft matching when `config` is set, exact lookup otherwise.
pub fn resolve<'t>(
    input: &str,
    config: Option<&MatchConfig>,
    table: &'t MappingTable,
) -> Result<&'t str> {
    match config {
        Some(config) => match_single_field(input, config, table),
        None => match_exact(input, table),
    }
}

fn no_match(input: &str) -> MappingError {
    MappingError::NoMatch {
        value: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ximport_model::MatchMethod;

    fn countries() -> MappingTable {
        MappingTable::from([
            ("Commonwealth of Australia", "AU"),
            ("Kingdom of Spain", "ES"),
        ])
    }

    #[test]
    fn first_match_in_table_order_wins() {
        let table = MappingTable::from([("Republic of Austria", "AT"), ("Austria-Hungary", "AH")]);
        let config = MatchConfig::symmetric(MatchMethod::Strpos, false);
        assert_eq!(match_single_field("Austria", &config, &table).unwrap(), "AT");
    }

    #[test]
    fn either_accepts_both_containments() {
        let table = MappingTable::from([("Australia", "AU"), ("Commonwealth of Australia", "CA")]);
        let config = MatchConfig::new(MatchMethod::Strpos, MatchDirection::Either);
        assert_eq!(
            match_single_field("Commonwealth of Australia", &config, &table).unwrap(),
            "AU"
        );
        assert_eq!(match_single_field("Australia", &config, &table).unwrap(), "AU");
        assert_eq!(match_single_field("Commonwealth", &config, &table).unwrap(), "CA");
    }

    #[test]
    fn empty_input_never_matches() {
        let table = countries();
        for direction in [
            MatchDirection::TargetContainsInput,
            MatchDirection::InputContainsTarget,
            MatchDirection::Either,
        ] {
            let config = MatchConfig::new(MatchMethod::Stripos, direction);
            assert!(match_single_field("", &config, &table).is_err());
        }
    }

    #[test]
    fn empty_table_never_matches() {
        let config = MatchConfig::symmetric(MatchMethod::Strpos, true);
        let err = match_single_field("Australia", &config, &MappingTable::new()).unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn exact_lookup() {
        let table = countries();
        assert_eq!(match_exact("Kingdom of Spain", &table).unwrap(), "ES");
        assert!(match_exact("Spain", &table).is_err());
        assert!(match_exact("kingdom of spain", &table).is_err());
    }

    #[test]
    fn resolve_dispatches_on_config() {
        let table = countries();
        let config = MatchConfig::symmetric(MatchMethod::Strpos, false);
        assert_eq!(resolve("Spain", Some(&config), &table).unwrap(), "ES");
        assert!(resolve("Spain", None, &table).is_err());
    }
}
