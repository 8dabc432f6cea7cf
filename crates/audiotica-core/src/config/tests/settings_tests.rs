use std::path::Path;

use tempfile::tempdir;

use crate::config::error::ConfigError;
use crate::config::{AppSettings, ConfigFormat, Theme};
use crate::services::PageKey;

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("a.JSON")), Some(ConfigFormat::Json));
    #[cfg(feature = "toml-config")]
    assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
    #[cfg(feature = "yaml-config")]
    assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path(Path::new("a.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("noext")), None);
}

#[test]
fn test_missing_keys_use_defaults() {
    let settings = AppSettings::parse(r#"{ "theme": "dark" }"#, ConfigFormat::Json).unwrap();

    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.initial_page, PageKey::Explore);
    assert_eq!(settings.explore_album_count, 10);
    assert_eq!(settings.log_level, "info");
}

#[cfg(feature = "toml-config")]
#[test]
fn test_parse_toml() {
    let contents = r#"
initial_page = "now-playing"
log_level = "debug"
explore_album_count = 4
"#;

    let settings = AppSettings::parse(contents, ConfigFormat::Toml).unwrap();

    assert_eq!(settings.initial_page, PageKey::NowPlaying);
    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.explore_album_count, 4);
}

#[test]
fn test_invalid_values_are_rejected() {
    let result = AppSettings::parse(r#"{ "explore_album_count": 0 }"#, ConfigFormat::Json);
    assert!(matches!(result, Err(ConfigError::InvalidValue { ref key, .. }) if key == "explore_album_count"));

    let result = AppSettings::parse(r#"{ "initial_page": "radio" }"#, ConfigFormat::Json);
    assert!(matches!(result, Err(ConfigError::Deserialization { .. })));
}

#[test]
fn test_save_and_load_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.json");
    let settings = AppSettings { theme: Theme::Light, initial_page: PageKey::Artists, ..AppSettings::default() };

    settings.save(&path).unwrap();
    let loaded = AppSettings::load(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_load_errors() {
    let dir = tempdir().unwrap();

    let unsupported = AppSettings::load(&dir.path().join("settings.ini"));
    assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat { .. })));

    let missing = AppSettings::load(&dir.path().join("missing.json"));
    assert!(matches!(missing, Err(ConfigError::Io { .. })));
}
