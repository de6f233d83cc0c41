//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use std::path::PathBuf;

use textpad::config::EditorConfig;
use textpad::config_paths;
use textpad::model::AppModel;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.ends_with("textpad"), "unexpected dir {}", dir.display());
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(file) = config_paths::config_file() {
        assert_eq!(file.file_name().unwrap(), "config.yaml");
    }
}

#[test]
fn test_default_dictionary_next_to_config() {
    if let (Some(dict), Some(dir)) = (
        config_paths::default_dictionary_file(),
        config_paths::config_dir(),
    ) {
        assert_eq!(dict, dir.join("words.txt"));
    }
}

#[test]
fn test_logs_dir_under_config_dir() {
    if let (Some(logs), Some(dir)) = (config_paths::logs_dir(), config_paths::config_dir()) {
        assert!(logs.starts_with(dir));
    }
}

// ========================================================================
// EditorConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.dictionary_path, None);
    assert_eq!(config.page_lines, 10);
    assert_eq!(config.history_limit, None);
    assert!(config.case_sensitive_search);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        dictionary_path: Some(PathBuf::from("/usr/share/dict/words")),
        page_lines: 25,
        history_limit: Some(200),
        case_sensitive_search: false,
    };

    config.save_to(&path).unwrap();
    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_yaml_matches_saved_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let config = EditorConfig {
        page_lines: 3,
        ..EditorConfig::default()
    };

    config.save_to(&path).unwrap();
    let yaml = config.to_yaml().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), yaml);
    assert!(yaml.contains("page_lines: 3"));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("missing.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_load_invalid_yaml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "page_lines: [not, a, number\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_load_sanitizes_zero_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "page_lines: 0\nhistory_limit: 0\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.page_lines, 10);
    assert_eq!(config.history_limit, None);
}

#[test]
fn test_history_limit_reaches_model() {
    let config = EditorConfig {
        history_limit: Some(5),
        ..EditorConfig::default()
    };
    let model = AppModel::new("x", config);
    assert_eq!(model.history.max_entries(), Some(5));
}
