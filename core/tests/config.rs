use dialpad_core::keypad::Normalization;
use dialpad_core::types::{AppConfig, AppConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

/// Verify a missing config file yields the defaults.
#[test]
fn test_load_missing_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = AppConfig::load(&AppConfig::path(temp_dir.path())).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.search.normalization, Normalization::Never);
    assert!(config.search.incremental_narrowing);
    assert!(config.directory.contacts_path.is_none());
}

/// Verify a saved config loads back unchanged.
#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = AppConfig::path(temp_dir.path());

    let mut config = AppConfig::default();
    config.search.normalization = Normalization::Fold;
    config.search.incremental_narrowing = false;
    config.directory.contacts_path = Some(PathBuf::from("contacts.toml"));
    config.save(&path).unwrap();

    assert_eq!(AppConfig::load(&path).unwrap(), config);
}

/// Verify omitted sections and fields fall back to their defaults.
#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = AppConfig::path(temp_dir.path());
    std::fs::write(&path, "[search]\nnormalization = \"fold\"\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.search.normalization, Normalization::Fold);
    assert!(config.search.incremental_narrowing);
    assert!(config.directory.contacts_path.is_none());
}

/// Verify malformed TOML is reported as a parse error.
#[test]
fn test_malformed_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = AppConfig::path(temp_dir.path());
    std::fs::write(&path, "[search\nnormalization = ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();

    assert!(matches!(err, AppConfigError::Parse(_)));
}

/// Verify an unknown normalization mode is rejected.
#[test]
fn test_unknown_normalization_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = AppConfig::path(temp_dir.path());
    std::fs::write(&path, "[search]\nnormalization = \"transliterate\"\n").unwrap();

    assert!(matches!(
        AppConfig::load(&path).unwrap_err(),
        AppConfigError::Parse(_)
    ));
}

/// Verify an empty contacts path is flagged and replaced by the default.
#[test]
fn test_validate_empty_contacts_path() {
    let mut config = AppConfig::default();
    assert!(config.validate().is_empty());

    config.directory.contacts_path = Some(PathBuf::new());
    assert_eq!(config.validate().len(), 1);

    let fixed = config.with_defaults_for_invalid();
    assert!(fixed.validate().is_empty());
    assert!(fixed.directory.contacts_path.is_none());
}
