//! Tests for soft matching of single field values.

use proptest::prelude::*;
use ximport_map::match_single_field;
use ximport_model::{MappingError, MappingTable, MatchConfig, MatchDirection, MatchMethod};

fn full_country_names() -> MappingTable {
    MappingTable::from([
        ("Commonwealth of Australia", "AU"),
        ("Kingdom of Spain", "ES"),
    ])
}

fn short_country_names() -> MappingTable {
    MappingTable::from([("Australia", "AU"), ("Spain", "ES")])
}

#[test]
fn strpos_not_symmetric_matches_label_containing_input() {
    let config = MatchConfig::symmetric(MatchMethod::Strpos, false);
    let table = full_country_names();
    let code = match_single_field("Australia", &config, &table).unwrap();
    assert_eq!(code, "AU");
}

#[test]
fn strpos_symmetric_matches_input_containing_label() {
    let config = MatchConfig::symmetric(MatchMethod::Strpos, true);
    let table = short_country_names();
    let code = match_single_field("Commonwealth of Australia", &config, &table).unwrap();
    assert_eq!(code, "AU");
}

#[test]
fn symmetric_does_not_test_label_containing_input() {
    let config = MatchConfig::symmetric(MatchMethod::Strpos, true);
    assert!(match_single_field("Australia", &config, &full_country_names()).is_err());
}

#[test]
fn strpos_is_case_sensitive() {
    let config = MatchConfig::symmetric(MatchMethod::Strpos, false);
    let err = match_single_field("australia", &config, &full_country_names()).unwrap_err();
    assert!(matches!(
        err,
        MappingError::NoMatch { ref value } if value == "australia"
    ));
}

#[test]
fn stripos_is_case_insensitive() {
    let config = MatchConfig::symmetric(MatchMethod::Stripos, false);
    let table = full_country_names();
    let code = match_single_field("australia", &config, &table).unwrap();
    assert_eq!(code, "AU");

    let symmetric = MatchConfig::symmetric(MatchMethod::Stripos, true);
    let table = short_country_names();
    let code = match_single_field("KINGDOM OF SPAIN", &symmetric, &table).unwrap();
    assert_eq!(code, "ES");
}

#[test]
fn unknown_value_fails_for_every_configuration() {
    for method in [MatchMethod::Strpos, MatchMethod::Stripos] {
        for direction in [
            MatchDirection::TargetContainsInput,
            MatchDirection::InputContainsTarget,
            MatchDirection::Either,
        ] {
            let config = MatchConfig::new(method, direction);
            for table in [full_country_names(), short_country_names()] {
                let err = match_single_field("Swaziland", &config, &table).unwrap_err();
                assert!(err.is_no_match(), "{method} / {direction}");
            }
        }
    }
}

#[test]
fn no_match_error_message_names_the_value() {
    let config = MatchConfig::symmetric(MatchMethod::Strpos, false);
    let err = match_single_field("Swaziland", &config, &full_country_names()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected value 'Swaziland': no mapping matched"
    );
}

fn method_strategy() -> impl Strategy<Value = MatchMethod> {
    prop_oneof![Just(MatchMethod::Strpos), Just(MatchMethod::Stripos)]
}

fn direction_strategy() -> impl Strategy<Value = MatchDirection> {
    prop_oneof![
        Just(MatchDirection::TargetContainsInput),
        Just(MatchDirection::InputContainsTarget),
        Just(MatchDirection::Either),
    ]
}

proptest! {
    #[test]
    fn returns_code_of_first_label_containing_input(
        labels in prop::collection::vec("[a-c]{1,6}", 1..8),
        input in "[a-c]{1,3}",
    ) {
        let table: MappingTable = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), index.to_string()))
            .collect();
        let config = MatchConfig::symmetric(MatchMethod::Strpos, false);
        let expected = table
            .iter()
            .find(|(label, _)| label.contains(input.as_str()))
            .map(|(_, code)| code.to_string());

        match match_single_field(&input, &config, &table) {
            Ok(code) => prop_assert_eq!(Some(code.to_string()), expected),
            Err(err) => {
                prop_assert!(err.is_no_match());
                prop_assert_eq!(expected, None);
            }
        }
    }

    #[test]
    fn repeated_calls_agree(
        labels in prop::collection::vec("[a-zA-Z ]{1,10}", 0..6),
        input in "[a-zA-Z ]{0,6}",
        method in method_strategy(),
        direction in direction_strategy(),
    ) {
        let table: MappingTable = labels
            .iter()
            .map(|label| (label.clone(), label.to_uppercase()))
            .collect();
        let config = MatchConfig::new(method, direction);
        let first = match_single_field(&input, &config, &table).ok().map(str::to_string);
        let second = match_single_field(&input, &config, &table).ok().map(str::to_string);
        prop_assert_eq!(first, second);
    }
}
