use starrate::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.rating.stars, 6);
    assert_eq!(config.rating.initial_rating, 3);
    assert_eq!(config.rating.reconfigure_to, None);
    assert_eq!(config.rating.min_stars, 3);
    assert_eq!(config.rating.max_stars, 10);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.mouse);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("starrate/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_toml_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[rating]
stars = 8
reconfigure_to = 10

[logging]
level = "debug"
file = "/tmp/starrate-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.rating.stars, 8);
    assert_eq!(config.rating.initial_rating, 3);
    assert_eq!(config.rating.reconfigure_to, Some(10));
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/starrate-test.log"))
    );
}

#[test]
fn test_out_of_range_stars_are_not_a_config_error() {
    let (_dir, path) = write_config("[rating]\nstars = 42\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rating.stars, 42);
}

#[test]
fn test_parse_invalid_toml() {
    let (_dir, path) = write_config("[rating\nstars = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[rating]\nstars = \"six\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn test_validation_fails_inverted_bounds() {
    let (_dir, path) = write_config("[rating]\nmin_stars = 9\nmax_stars = 4\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("Invalid star bounds"));
}

#[test]
fn test_validation_fails_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_config_roundtrip() {
    let mut config = Config::default();
    config.rating.reconfigure_to = Some(7);
    config.ui.mouse = false;

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
}
