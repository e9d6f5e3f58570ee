//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_app_dir_and_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("flickr-carousel") && path_str.ends_with("config.toml"),
            "Path should contain 'flickr-carousel' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_log_file_name() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("flickr-carousel.log"),
        "Default log path should end with 'flickr-carousel.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("flickr_carousel_test_config.toml");

    let toml_content = r#"
api_key = "abc123"
page_size = 10
debounce_ms = 300
request_timeout_ms = 2000
layout = "linear"
log_file_path = "/tmp/carousel.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.api_key, Some("abc123".to_string()));
    assert_eq!(config.page_size, Some(10));
    assert_eq!(config.debounce_ms, Some(300));
    assert_eq!(config.request_timeout_ms, Some(2000));
    assert_eq!(config.layout, Some(LayoutMode::Linear));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/carousel.log")));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("flickr_carousel_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write test config");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("flickr_carousel_test_unknown.toml");
    fs::write(&config_path, "theme = \"dark\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_layout() {
    let config_path = env::temp_dir().join("flickr_carousel_test_layout.toml");
    fs::write(&config_path, "layout = \"spiral\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("flickr_carousel_test_partial.toml");
    fs::write(&config_path, "debounce_ms = 500\n# everything else omitted\n")
        .expect("Failed to write test config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.debounce_ms, Some(500));
    assert_eq!(config.api_key, None);
    assert_eq!(config.layout, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn defaults_match_search_contract() {
    let defaults = ResolvedConfig::default();
    assert_eq!(defaults.page_size, 15);
    assert_eq!(defaults.debounce(), Duration::from_millis(750));
    assert_eq!(defaults.layout, LayoutMode::Circular);
    assert_eq!(defaults.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        api_key: Some("key".to_string()),
        layout: Some(LayoutMode::Linear),
        page_size: Some(5),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.api_key, "key");
    assert_eq!(resolved.layout, LayoutMode::Linear);
    assert_eq!(resolved.page_size, 5);
    assert_eq!(resolved.debounce_ms, defaults.debounce_ms);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
#[serial(env)]
fn env_overrides_api_key_and_debounce() {
    env::set_var(ENV_API_KEY, "from-env");
    env::set_var(ENV_DEBOUNCE_MS, "250");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_API_KEY);
    env::remove_var(ENV_DEBOUNCE_MS);

    assert_eq!(config.api_key, "from-env");
    assert_eq!(config.debounce_ms, 250);
}

#[test]
#[serial(env)]
fn env_debounce_ignored_when_not_numeric() {
    env::set_var(ENV_DEBOUNCE_MS, "soon");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(ENV_DEBOUNCE_MS);

    assert_eq!(config.debounce_ms, 750);
}

#[test]
#[serial(env)]
fn env_config_path_is_used_when_no_cli_path() {
    let config_path = env::temp_dir().join("flickr_carousel_test_env_path.toml");
    fs::write(&config_path, "page_size = 3\n").expect("Failed to write test config");

    env::set_var(ENV_CONFIG_PATH, &config_path);
    let loaded = load_config_with_precedence(None);
    env::remove_var(ENV_CONFIG_PATH);

    assert_eq!(loaded.unwrap().and_then(|c| c.page_size), Some(3));
    fs::remove_file(config_path).ok();
}

#[test]
#[serial(env)]
fn explicit_path_beats_env_path() {
    let env_path = env::temp_dir().join("flickr_carousel_test_env_loser.toml");
    let cli_path = env::temp_dir().join("flickr_carousel_test_cli_winner.toml");
    fs::write(&env_path, "page_size = 3\n").expect("Failed to write test config");
    fs::write(&cli_path, "page_size = 9\n").expect("Failed to write test config");

    env::set_var(ENV_CONFIG_PATH, &env_path);
    let loaded = load_config_with_precedence(Some(cli_path.clone()));
    env::remove_var(ENV_CONFIG_PATH);

    assert_eq!(loaded.unwrap().and_then(|c| c.page_size), Some(9));
    fs::remove_file(env_path).ok();
    fs::remove_file(cli_path).ok();
}

#[test]
fn cli_overrides_win_over_everything() {
    let base = ResolvedConfig {
        api_key: "file".to_string(),
        debounce_ms: 100,
        layout: LayoutMode::Circular,
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(
        base,
        CliOverrides {
            api_key: Some("cli".to_string()),
            debounce_ms: Some(900),
            layout: Some(LayoutMode::Linear),
        },
    );

    assert_eq!(resolved.api_key, "cli");
    assert_eq!(resolved.debounce_ms, 900);
    assert_eq!(resolved.layout, LayoutMode::Linear);
}

#[test]
fn empty_cli_overrides_change_nothing() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), CliOverrides::default()), base);
}
