// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory block type and the pure mutation operations.
//!
//! Mutations never modify the input collection. They take the blocks by
//! reference and return a brand new collection for the caller to commit, so
//! the canonical copy always stays with the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A labeled unit of free-text content editable by the memory tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryBlock {
    /// Unique identifier within a collection; acts as the lookup key.
    pub label: String,
    /// Text content, newline-delimited into logical lines.
    pub value: String,
    /// Set on every successful mutation of this block.
    pub last_updated: DateTime<Utc>,
}

impl MemoryBlock {
    /// Creates a block with the current time as its `last_updated`.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            last_updated: Utc::now(),
        }
    }
}

/// Result of a pure mutation over a block collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// The edit was applied; the new collection is ready to commit.
    Applied(Vec<MemoryBlock>),
    /// No block with the requested label exists; nothing was changed.
    NotFound,
}

/// Inserts `new_str` as a new line in the block labeled `label`.
///
/// The value is split on `\n`, the new line is spliced in at `insert_line`,
/// and the lines are rejoined. No existing line is removed. Index semantics
/// follow `Array.prototype.splice`: 0 inserts before all existing lines,
/// out-of-range positive indices append at the end, and negative indices
/// count from the end -- so `-1` lands *before* the final line, not after it.
/// That last behavior diverges from the tool description's "-1 for end" and
/// is reproduced here unchanged pending product review.
///
/// On duplicate labels the first matching block wins.
pub fn insert_at_line(
    blocks: &[MemoryBlock],
    label: &str,
    new_str: &str,
    insert_line: i64,
) -> Mutation {
    let Some(idx) = blocks.iter().position(|b| b.label == label) else {
        return Mutation::NotFound;
    };

    let mut next = blocks.to_vec();
    let block = &mut next[idx];
    let mut lines: Vec<&str> = block.value.split('\n').collect();
    let at = splice_index(lines.len(), insert_line);
    lines.insert(at, new_str);
    let value = lines.join("\n");
    block.value = value;
    block.last_updated = Utc::now();
    Mutation::Applied(next)
}

/// Replaces every non-overlapping occurrence of `old_str` with `new_str` in
/// the block labeled `label`.
///
/// Literal substring match, not pattern match. Replacing text that does not
/// occur is a successful no-op that still stamps `last_updated`. On duplicate
/// labels the first matching block wins.
pub fn replace_all(
    blocks: &[MemoryBlock],
    label: &str,
    old_str: &str,
    new_str: &str,
) -> Mutation {
    let Some(idx) = blocks.iter().position(|b| b.label == label) else {
        return Mutation::NotFound;
    };

    let mut next = blocks.to_vec();
    let block = &mut next[idx];
    block.value = block.value.replace(old_str, new_str);
    block.last_updated = Utc::now();
    Mutation::Applied(next)
}

/// Resolves a splice-style insertion index against a line count.
///
/// Negative indices count back from the end and clamp at 0; positive indices
/// clamp to `len` (append).
fn splice_index(len: usize, insert_line: i64) -> usize {
    if insert_line < 0 {
        (len as i64 + insert_line).max(0) as usize
    } else {
        (insert_line as u64).min(len as u64) as usize
    }
}
