// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Scout agent tools.

use thiserror::Error;

/// The primary error type used across the Scout workspace.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Configuration errors (invalid TOML, missing required fields, bad header values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Tool invocation errors (missing parameters, malformed input).
    #[error("tool error: {message}")]
    Tool {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// External API errors (request failure, non-success status after retries).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
