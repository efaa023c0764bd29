use super::*;

#[test]
fn default_config_has_expected_log_settings() {
    let config = AppConfig::default();
    assert_eq!(config.logs.min_key_width, 35);
    assert!(config.logs.color);
    assert_eq!(config.logs.tail_lines, 0);
    assert!(!config.logs.timestamps);
}

#[test]
fn zero_tail_lines_means_whole_log() {
    let config = AppConfig::default();
    assert_eq!(config.logs.tail(), None);
}

#[test]
fn parse_logs_from_toml_with_dashed_keys() {
    let raw = r#"
[logs]
min-key-width = 20
tail-lines = 100
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.logs.min_key_width, 20);
    assert_eq!(config.logs.tail(), Some(100));
    assert!(config.logs.color);
}

#[test]
fn empty_toml_falls_back_to_defaults() {
    let config: AppConfig = toml::from_str("").unwrap();
    assert_eq!(config.logs.min_key_width, 35);
}

#[test]
fn user_file_merges_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logs]\ncolor = false\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert!(!config.logs.color);
    assert_eq!(config.logs.min_key_width, 35);
}

#[test]
fn load_from_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logs\ncolor = ").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}
