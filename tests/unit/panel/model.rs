use super::*;

#[test]
fn default_config_matches_documented_values() {
    let config = PanelConfig::default();
    assert_eq!(config.speed, 0.2);
    assert_eq!(config.target, "");
    assert!(config.validate().is_ok());
}

#[test]
fn sparse_json_options_fall_back_to_defaults() {
    let config = PanelConfig::from_json(r#"{"target": ".parallax-window"}"#).unwrap();
    assert_eq!(config.speed, 0.2);
    assert_eq!(config.target, ".parallax-window");

    let config = PanelConfig::from_json(r#"{"speed": -0.5}"#).unwrap();
    assert_eq!(config.speed, -0.5);
    assert_eq!(config.target, "");
}

#[test]
fn config_rejects_unusable_speeds() {
    assert!(PanelConfig::from_json(r#"{"speed": 1.5}"#).is_err());
    assert!(
        PanelConfig {
            speed: f64::NAN,
            target: String::new(),
        }
        .validate()
        .is_err()
    );
    // speed == 1 (full lock) is the inclusive upper bound
    assert!(PanelConfig::from_json(r#"{"speed": 1.0}"#).is_ok());
}

#[test]
fn malformed_json_surfaces_as_serde_error() {
    let err = PanelConfig::from_json("{not json").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}
