// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller-owned store of memory blocks.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::block::MemoryBlock;

/// The agent's ordered collection of memory blocks.
///
/// The store owns the canonical copy. Tools compute a new collection from a
/// snapshot and commit it back wholesale via [`AgentMemory::commit`]. There
/// is no locking or compare-and-swap beyond the outer `RwLock`: two racing
/// mutations of the same label are last-writer-wins, an accepted limitation
/// of the full-collection replacement model.
#[derive(Debug, Clone, Default)]
pub struct AgentMemory {
    blocks: Vec<MemoryBlock>,
}

impl AgentMemory {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given blocks.
    pub fn with_blocks(blocks: Vec<MemoryBlock>) -> Self {
        Self { blocks }
    }

    /// Returns the current block collection.
    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    /// Replaces the whole collection with a mutated copy.
    pub fn commit(&mut self, blocks: Vec<MemoryBlock>) {
        self.blocks = blocks;
    }

    /// Returns the first block with the given label, if any.
    pub fn get(&self, label: &str) -> Option<&MemoryBlock> {
        self.blocks.iter().find(|b| b.label == label)
    }
}

/// Handle to an [`AgentMemory`] shared between the host and its tools.
pub type SharedMemory = Arc<RwLock<AgentMemory>>;

/// Creates a shared handle around a store.
pub fn shared(memory: AgentMemory) -> SharedMemory {
    Arc::new(RwLock::new(memory))
}
