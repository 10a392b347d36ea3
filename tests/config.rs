use epochal::config::Config;
use epochal::convert::TimeReference;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert!(config.ui.clock_autostart);
    assert_eq!(config.ui.default_reference, "local");
    assert_eq!(config.display.date_format, "%a, %d %b %Y %H:%M:%S %z");
    assert!(!config.logging.enabled);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid reference should fail
    config.ui.default_reference = "utc+2".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid date format
    config.ui.default_reference = "gmt".to_string();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());

    config.display.date_format = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_reference = \"local\""));
    assert!(toml_str.contains("clock_autostart = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
default_reference = "gmt"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.default_reference, "gmt");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert!(config.ui.clock_autostart);
    assert_eq!(config.display.date_format, "%a, %d %b %Y %H:%M:%S %z");
}

#[test]
fn test_default_reference_mapping() {
    let mut config = Config::default();
    assert_eq!(config.default_reference(), TimeReference::Local);

    config.ui.default_reference = "gmt".to_string();
    assert_eq!(config.default_reference(), TimeReference::Gmt);
}
