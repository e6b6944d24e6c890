// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Web search and website reading tools backed by [`TavilyClient`].
//!
//! Both tools return the raw API response text, truncated to 50KB to prevent
//! excessive token usage. The two exhaustion paths of the client diverge
//! deliberately: rate-limit exhaustion becomes a sentinel failure string
//! returned as an ordinary result, while a transport failure is re-raised as
//! a tool-execution error.

use std::sync::Arc;

use async_trait::async_trait;
use scout_core::{ScoutError, Tool, ToolOutput};

use crate::client::{FetchOutcome, TavilyClient};

/// Maximum response body size in bytes (50KB).
const MAX_RESPONSE_SIZE: usize = 50 * 1024;

/// Sentinel failure string for an internet search that exhausted its retries
/// rate-limited.
pub const SEARCH_FAILURE: &str = "Error: Failed to search the internet";

/// Sentinel failure string for a website read that exhausted its retries
/// rate-limited.
pub const READ_FAILURE: &str = "Error: Failed to read the website(s)";

fn truncate_body(body: String) -> String {
    if body.len() <= MAX_RESPONSE_SIZE {
        return body;
    }
    // Back the cut off to a char boundary so it never splits a multibyte
    // character.
    let mut cut = MAX_RESPONSE_SIZE;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!(
        "{}...\n\n[Response truncated from {} to {} bytes]",
        &body[..cut],
        body.len(),
        cut
    )
}

/// Searches the internet via the Tavily search endpoint.
pub struct InternetSearchTool {
    client: Arc<TavilyClient>,
}

impl InternetSearchTool {
    /// Creates the tool over a shared client.
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for InternetSearchTool {
    fn name(&self) -> &str {
        "internet_search"
    }

    fn description(&self) -> &str {
        "Search the internet for information"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query to search for"
                }
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, ScoutError> {
        let query = input["query"].as_str().ok_or_else(|| ScoutError::Tool {
            message: "missing required 'query' parameter".to_string(),
            source: None,
        })?;

        match self.client.search(query).await {
            FetchOutcome::Success(body) => Ok(ToolOutput::success(truncate_body(body))),
            FetchOutcome::RateLimitExhausted => Ok(ToolOutput::failure(SEARCH_FAILURE)),
            FetchOutcome::TransportFailure(err) => Err(err),
        }
    }
}

/// Reads the contents of websites via the Tavily extract endpoint.
pub struct ReadWebsiteTool {
    client: Arc<TavilyClient>,
}

impl ReadWebsiteTool {
    /// Creates the tool over a shared client.
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ReadWebsiteTool {
    fn name(&self) -> &str {
        "read_website"
    }

    fn description(&self) -> &str {
        "Read the contents of website(s) for information"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "urls": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "The URLs to read from"
                }
            },
            "required": ["urls"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, ScoutError> {
        let urls: Vec<String> = input["urls"]
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .ok_or_else(|| ScoutError::Tool {
                message: "missing required 'urls' parameter".to_string(),
                source: None,
            })?;

        match self.client.extract(&urls).await {
            FetchOutcome::Success(body) => Ok(ToolOutput::success(truncate_body(body))),
            FetchOutcome::RateLimitExhausted => Ok(ToolOutput::failure(READ_FAILURE)),
            FetchOutcome::TransportFailure(err) => Err(err),
        }
    }
}
