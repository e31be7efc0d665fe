//! Config file loading.

use std::io::Write;
use tutorial_games::HostConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "show_coordinates = false\nlog_filter = \"debug\"").expect("Write config");

    let config = HostConfig::from_file(file.path()).expect("Valid config");
    assert!(!*config.show_coordinates());
    assert!(!*config.show_history());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = HostConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, HostConfig::default());
}

#[test]
fn test_missing_file_is_error_when_required() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = HostConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_unparseable_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "show_history = [").expect("Write config");
    assert!(HostConfig::load_or_default(file.path()).is_err());
}
