// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory editing tools.
//!
//! Thin [`Tool`] adapters over the pure mutations in [`crate::block`]: each
//! invocation snapshots the shared store, applies the mutation, and commits
//! the returned collection back.

use async_trait::async_trait;
use scout_core::{ScoutError, Tool, ToolOutput};
use tracing::debug;

use crate::block::{self, Mutation};
use crate::store::SharedMemory;

/// Result string for a lookup on an absent label. A successful-but-negative
/// outcome, not an error.
pub const BLOCK_NOT_FOUND: &str = "Block not found";

/// Result string for a successful insertion.
pub const INSERT_SUCCESS: &str = "Successfully inserted into memory block";

/// Result string for a successful replacement.
pub const REPLACE_SUCCESS: &str = "Successfully replaced in memory block";

fn required_str<'a>(input: &'a serde_json::Value, name: &str) -> Result<&'a str, ScoutError> {
    input[name].as_str().ok_or_else(|| ScoutError::Tool {
        message: format!("missing required '{name}' parameter"),
        source: None,
    })
}

/// Inserts a line of text into a labeled memory block.
pub struct MemoryInsertTool {
    memory: SharedMemory,
}

impl MemoryInsertTool {
    /// Creates the tool over the host's shared memory store.
    pub fn new(memory: SharedMemory) -> Self {
        Self { memory }
    }
}

#[async_trait]
impl Tool for MemoryInsertTool {
    fn name(&self) -> &str {
        "memory_insert"
    }

    fn description(&self) -> &str {
        "Insert text at a specific location in a memory block."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "label": {
                    "type": "string",
                    "description": "Which memory block to edit."
                },
                "new_str": {
                    "type": "string",
                    "description": "Text to insert."
                },
                "insert_line": {
                    "type": "number",
                    "description": "Line number (0 for beginning, -1 for end)"
                }
            },
            "required": ["label", "new_str", "insert_line"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, ScoutError> {
        let label = required_str(&input, "label")?;
        let new_str = required_str(&input, "new_str")?;
        let insert_line = input["insert_line"].as_i64().ok_or_else(|| ScoutError::Tool {
            message: "missing required 'insert_line' parameter".to_string(),
            source: None,
        })?;

        debug!(label, insert_line, "inserting into memory block");

        let mut memory = self.memory.write().await;
        match block::insert_at_line(memory.blocks(), label, new_str, insert_line) {
            Mutation::Applied(next) => {
                memory.commit(next);
                Ok(ToolOutput::success(INSERT_SUCCESS))
            }
            Mutation::NotFound => Ok(ToolOutput::success(BLOCK_NOT_FOUND)),
        }
    }
}

/// Replaces a specific string in a labeled memory block.
pub struct MemoryReplaceTool {
    memory: SharedMemory,
}

impl MemoryReplaceTool {
    /// Creates the tool over the host's shared memory store.
    pub fn new(memory: SharedMemory) -> Self {
        Self { memory }
    }
}

#[async_trait]
impl Tool for MemoryReplaceTool {
    fn name(&self) -> &str {
        "memory_replace"
    }

    fn description(&self) -> &str {
        "Replace a specific string in a memory block with a new string. Used for precise edits."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "label": {
                    "type": "string",
                    "description": "Which memory block to edit"
                },
                "old_str": {
                    "type": "string",
                    "description": "Exact text to find and replace"
                },
                "new_str": {
                    "type": "string",
                    "description": "Replacement text"
                }
            },
            "required": ["label", "old_str", "new_str"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, ScoutError> {
        let label = required_str(&input, "label")?;
        let old_str = required_str(&input, "old_str")?;
        let new_str = required_str(&input, "new_str")?;

        debug!(label, "replacing in memory block");

        let mut memory = self.memory.write().await;
        match block::replace_all(memory.blocks(), label, old_str, new_str) {
            Mutation::Applied(next) => {
                memory.commit(next);
                Ok(ToolOutput::success(REPLACE_SUCCESS))
            }
            Mutation::NotFound => Ok(ToolOutput::success(BLOCK_NOT_FOUND)),
        }
    }
}
