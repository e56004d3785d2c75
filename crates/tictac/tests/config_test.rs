//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use tictac::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
    assert!(*config.show_cell_numbers());
}

#[test]
fn test_loads_values_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "show_cell_numbers = false").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.show_cell_numbers());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_cell_numbers = \"maybe\"").unwrap();

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
