// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./scout.toml` > `~/.config/scout/scout.toml` > `/etc/scout/scout.toml`
//! with environment variable overrides via `SCOUT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ScoutConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/scout/scout.toml` (system-wide)
/// 3. `~/.config/scout/scout.toml` (user XDG config)
/// 4. `./scout.toml` (local directory)
/// 5. `SCOUT_*` environment variables
pub fn load_config() -> Result<ScoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ScoutConfig::default()))
        .merge(Toml::file("/etc/scout/scout.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("scout/scout.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("scout.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ScoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ScoutConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ScoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ScoutConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. `SCOUT_TAVILY_API_KEY` must map to
/// `tavily.api_key`, not `tavily.api.key`.
fn env_provider() -> Env {
    Env::prefixed("SCOUT_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SCOUT_TAVILY_API_KEY -> "tavily_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("tavily_", "tavily.", 1);
        mapped.into()
    })
}
