// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Scout agent tools.
//!
//! TOML configuration with XDG hierarchy and `SCOUT_*` environment variable
//! overrides, merged via Figment.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AgentConfig, ScoutConfig, TavilyConfig};
