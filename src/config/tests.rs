//! Tests for settings functionality.

use super::operations::{names_subdirectory, path_contains_traversal};
use crate::config::{ColorMode, Settings};
use crate::error::HookError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.e2e_dir, "tests/e2e");
    assert_eq!(settings.color, ColorMode::Auto);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let settings = Settings::from_yaml("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
e2e_dir: frontend/cypress
color: never
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    assert_eq!(settings.e2e_dir, "frontend/cypress");
    assert_eq!(settings.color, ColorMode::Never);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
color: always
future_option: true
"#;
    let settings = Settings::from_yaml(yaml).unwrap();
    assert_eq!(settings.color, ColorMode::Always);
    assert_eq!(settings.e2e_dir, "tests/e2e");
}

#[test]
fn test_invalid_color_value() {
    let result = Settings::from_yaml("color: sometimes\n");
    assert!(matches!(result, Err(HookError::UserError(_))));
}

#[test]
fn test_empty_e2e_dir_rejected() {
    let err = Settings::from_yaml("e2e_dir: \"  \"\n").unwrap_err();
    assert!(err.to_string().contains("e2e_dir must be non-empty"));
}

#[test]
fn test_absolute_e2e_dir_rejected() {
    let err = Settings::from_yaml("e2e_dir: /tmp/e2e\n").unwrap_err();
    assert!(err.to_string().contains("must be relative"));
}

#[test]
fn test_traversal_e2e_dir_rejected() {
    let err = Settings::from_yaml("e2e_dir: tests/../../e2e\n").unwrap_err();
    assert!(err.to_string().contains("must stay inside the project root"));
}

#[test]
fn test_e2e_dir_resolving_to_root_rejected() {
    for dir in [".", "./", "./.", "\".\""] {
        let yaml = format!("e2e_dir: {}\n", dir);
        let err = Settings::from_yaml(&yaml).unwrap_err();
        assert!(
            err.to_string().contains("must name a directory below the project root"),
            "'{}' should be rejected, got: {}",
            dir,
            err
        );
    }
}

#[test]
fn test_e2e_dir_with_leading_cur_dir_rejected() {
    let err = Settings::from_yaml("e2e_dir: ./tests/e2e\n").unwrap_err();
    assert!(matches!(err, HookError::UserError(_)));
}

#[test]
fn test_names_subdirectory() {
    assert!(names_subdirectory(Path::new("tests/e2e")));
    assert!(names_subdirectory(Path::new("e2e")));
    assert!(!names_subdirectory(Path::new(".")));
    assert!(!names_subdirectory(Path::new("./")));
    assert!(!names_subdirectory(Path::new("./tests")));
    assert!(!names_subdirectory(Path::new("")));
}

#[test]
fn test_path_contains_traversal() {
    assert!(path_contains_traversal(Path::new("../foo")));
    assert!(path_contains_traversal(Path::new("foo/../bar")));
    assert!(path_contains_traversal(Path::new("foo/bar/..")));
    assert!(!path_contains_traversal(Path::new("foo/bar")));
    assert!(!path_contains_traversal(Path::new("./relative")));
}

#[test]
fn test_e2e_path_joins_root() {
    let settings = Settings::default();
    let root = Path::new("/work/my-app");
    assert_eq!(
        settings.e2e_path(root),
        Path::new("/work/my-app/tests/e2e")
    );
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Always.resolve(false, true));
    assert!(!ColorMode::Never.resolve(true, false));
    assert!(ColorMode::Auto.resolve(true, false));
    assert!(!ColorMode::Auto.resolve(false, false));
    assert!(!ColorMode::Auto.resolve(true, true));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hooks.yaml");
    std::fs::write(&path, "e2e_dir: e2e\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.e2e_dir, "e2e");
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Settings::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read settings file"));
}

#[test]
fn test_yaml_round_trip_keeps_values() {
    let settings = Settings {
        e2e_dir: "e2e".to_string(),
        color: ColorMode::Never,
    };
    let yaml = serde_yaml::to_string(&settings).unwrap();
    assert_eq!(Settings::from_yaml(&yaml).unwrap(), settings);
}
