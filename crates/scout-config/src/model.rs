// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Scout agent tools.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Scout configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoutConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Tavily search/extract API settings.
    #[serde(default)]
    pub tavily: TavilyConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "scout".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Tavily API configuration.
///
/// The retry cap and delay are configuration values rather than hardcoded
/// constants so tests can shrink the delay without real time passing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TavilyConfig {
    /// Tavily API key. `None` requires the `SCOUT_TAVILY_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Search endpoint URL.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Extract endpoint URL.
    #[serde(default = "default_extract_url")]
    pub extract_url: String,

    /// Total request attempts per tool call (initial attempt plus retries).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay in milliseconds after a rate-limited response.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            search_url: default_search_url(),
            extract_url: default_extract_url(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_search_url() -> String {
    "https://api.tavily.com/search".to_string()
}

fn default_extract_url() -> String {
    "https://api.tavily.com/extract".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    5000
}
