// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Scout agent tools.
//!
//! This crate provides the error type, the [`Tool`] trait, and the
//! [`ToolRegistry`] used by the tool crates and the CLI.

pub mod error;
pub mod tool;

// Re-export key items at crate root for ergonomic imports.
pub use error::ScoutError;
pub use tool::{Tool, ToolOutput, ToolRegistry};
