// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Scout configuration system.

use scout_config::{ScoutConfig, load_config_from_path, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_scout_config() {
    let toml = r#"
[agent]
name = "test-agent"
log_level = "debug"

[tavily]
api_key = "tvly-123"
search_url = "http://localhost:9999/search"
extract_url = "http://localhost:9999/extract"
max_attempts = 5
retry_delay_ms = 10
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-agent");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.tavily.api_key.as_deref(), Some("tvly-123"));
    assert_eq!(config.tavily.search_url, "http://localhost:9999/search");
    assert_eq!(config.tavily.extract_url, "http://localhost:9999/extract");
    assert_eq!(config.tavily.max_attempts, 5);
    assert_eq!(config.tavily.retry_delay_ms, 10);
}

/// An empty config string yields compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    let defaults = ScoutConfig::default();
    assert_eq!(config.agent.name, defaults.agent.name);
    assert_eq!(config.tavily.search_url, defaults.tavily.search_url);
    assert_eq!(config.tavily.max_attempts, 3);
    assert_eq!(config.tavily.retry_delay_ms, 5000);
}

/// Partial sections keep defaults for unset fields.
#[test]
fn partial_section_keeps_defaults() {
    let toml = r#"
[tavily]
api_key = "tvly-abc"
"#;
    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.tavily.api_key.as_deref(), Some("tvly-abc"));
    assert_eq!(config.tavily.search_url, "https://api.tavily.com/search");
    assert_eq!(config.tavily.max_attempts, 3);
}

/// Unknown config keys are rejected.
#[test]
fn unknown_field_is_rejected() {
    let toml = r#"
[agent]
name = "test"
max_sessions = 5
"#;
    let result = load_config_from_str(toml);
    assert!(result.is_err(), "unknown key should be rejected: {result:?}");
}

/// `SCOUT_TAVILY_API_KEY` maps to `tavily.api_key` via the explicit env map.
#[test]
fn env_var_overrides_tavily_api_key() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "scout.toml",
            r#"
[tavily]
api_key = "from-file"
"#,
        )?;
        jail.set_env("SCOUT_TAVILY_API_KEY", "from-env");

        let config = load_config_from_path(std::path::Path::new("scout.toml"))
            .expect("config should load");
        assert_eq!(config.tavily.api_key.as_deref(), Some("from-env"));
        Ok(())
    });
}

/// `SCOUT_AGENT_LOG_LEVEL` maps to `agent.log_level`, not `agent.log.level`.
#[test]
fn env_var_maps_underscored_keys_to_sections() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("SCOUT_AGENT_LOG_LEVEL", "trace");

        let config = load_config_from_path(std::path::Path::new("does-not-exist.toml"))
            .expect("config should load from defaults + env");
        assert_eq!(config.agent.log_level, "trace");
        Ok(())
    });
}
