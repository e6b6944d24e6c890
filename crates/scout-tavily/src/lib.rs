// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tavily search/extract client and the web tools for Scout.
//!
//! [`client::TavilyClient`] performs one logical POST per tool call with
//! bounded retry; [`tools`] exposes it as the `internet_search` and
//! `read_website` tools.

pub mod client;
pub mod tools;

pub use client::{
    DEFAULT_EXTRACT_URL, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS, DEFAULT_SEARCH_URL,
    FetchOutcome, TavilyClient,
};
pub use tools::{InternetSearchTool, READ_FAILURE, ReadWebsiteTool, SEARCH_FAILURE};
