//! Loading mapping configurations from JSON.

use ximport_model::{MappingConfiguration, MappingError, MatchDirection, MatchMethod};

#[test]
fn loads_soft_match_configuration() {
    let json = r#"{
        "valueMap": {
            "Commonwealth of Australia": "AU",
            "Kingdom of Spain": "ES"
        },
        "matchMethod": "stripos",
        "matchSymmetric": false,
        "default": "XX",
        "multipleValuesSeparator": ";"
    }"#;

    let config = MappingConfiguration::from_json_str(json).expect("load configuration");
    let labels: Vec<&str> = config.value_map.labels().collect();
    assert_eq!(labels, vec!["Commonwealth of Australia", "Kingdom of Spain"]);
    assert_eq!(config.default.as_deref(), Some("XX"));
    assert_eq!(config.separator(), Some(";"));

    let match_config = config.match_config().unwrap().expect("soft matching configured");
    assert_eq!(match_config.method, MatchMethod::Stripos);
    assert_eq!(match_config.direction, MatchDirection::TargetContainsInput);
}

#[test]
fn loads_exact_configuration_with_defaults() {
    let config =
        MappingConfiguration::from_json_str(r#"{"valueMap": {"Australia": "AU"}}"#).unwrap();
    assert!(!config.match_symmetric);
    assert!(config.match_method.is_none());
    assert!(config.match_config().unwrap().is_none());
}

#[test]
fn loads_from_reader() {
    let json = br#"{"valueMap": {"Spain": "ES"}, "matchMethod": "strpos", "matchSymmetric": true}"#;
    let config = MappingConfiguration::from_json_reader(&json[..]).unwrap();
    let match_config = config.match_config().unwrap().unwrap();
    assert_eq!(match_config.direction, MatchDirection::InputContainsTarget);
}

#[test]
fn rejects_unknown_match_method_at_load() {
    let err = MappingConfiguration::from_json_str(
        r#"{"valueMap": {"Australia": "AU"}, "matchMethod": "similar_text"}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MappingError::UnknownMatchMethod { ref value } if value == "similar_text"
    ));
}

#[test]
fn rejects_unknown_direction_at_load() {
    let err = MappingConfiguration::from_json_str(
        r#"{"valueMap": {}, "matchMethod": "strpos", "matchDirection": "both ways"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MappingError::UnknownMatchDirection { .. }));
}

#[test]
fn rejects_malformed_json() {
    let err = MappingConfiguration::from_json_str(r#"{"valueMap": ["AU"]}"#).unwrap_err();
    assert!(matches!(err, MappingError::Config(_)));
    assert!(err.to_string().starts_with("invalid mapping configuration"));
}

#[test]
fn serializes_back_to_camel_case() {
    let config = MappingConfiguration::from_json_str(
        r#"{"valueMap": {"Spain": "ES"}, "matchMethod": "strpos"}"#,
    )
    .unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["matchMethod"], "strpos");
    assert_eq!(json["matchSymmetric"], false);
    assert_eq!(json["valueMap"]["Spain"], "ES");
    assert!(json.get("default").is_none());
}
