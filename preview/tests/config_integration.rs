use claims::{assert_err, assert_ok};
use gridtint::app;
use gridtint::config::{ConfigLoadResult, load_config};
use std::io::Write;
use tempfile::NamedTempFile;
use themes::{ColorDepth, ThemeId};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let file = write_config(
        r#"
theme = 12
bold_cursor = true

[terminal]
colors = 8
default_colors = false

[logging]
level = "debug"
"#,
    );

    let config = assert_ok!(app::unwrap_config(load_config(Some(file.path()))));

    assert_eq!(config.theme(), ThemeId(12));
    assert!(config.bold_cursor());
    assert!(!config.bold_labels());
    assert_eq!(config.capability().depth, ColorDepth::Basic8);
    assert!(!config.capability().default_colors);
    assert_eq!(config.logging().level(), "debug");
    assert_ok!(config.validate());
}

#[test]
fn test_partial_file_keeps_embedded_defaults() {
    let file = write_config("tabular_display = true\n");

    let config = assert_ok!(app::unwrap_config(load_config(Some(file.path()))));

    assert!(config.tabular_display());
    assert_eq!(config.terminal().colors(), 256);
    assert!(config.terminal().default_colors());
}

#[test]
fn test_missing_explicit_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("absent.toml");

    match load_config(Some(&missing)) {
        ConfigLoadResult::LoadError(message) => {
            assert!(message.contains("Configuration loading failed"));
        }
        _ => panic!("expected a load error for a missing explicit file"),
    }
}

#[test]
fn test_wrong_value_type_is_a_deserialize_error() {
    let file = write_config("theme = \"solarized\"\n");

    let error = assert_err!(app::unwrap_config(load_config(Some(file.path()))));
    assert!(error.to_string().starts_with("Configuration Error:"));
}

#[test]
fn test_out_of_range_values_fail_validation() {
    let file = write_config("theme = 40\n\n[terminal]\ncolors = 0\n");

    let config = assert_ok!(app::unwrap_config(load_config(Some(file.path()))));
    let errors = assert_err!(config.validate());
    assert_eq!(errors.len(), 2);
}
