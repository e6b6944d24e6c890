// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Labeled memory blocks and the memory editing tools for Scout.
//!
//! The mutations themselves are pure functions over a block collection
//! ([`block`]); the tools ([`tools`]) snapshot the caller-owned store, apply
//! a mutation, and commit the returned collection back wholesale.

pub mod block;
pub mod store;
pub mod tools;

pub use block::{MemoryBlock, Mutation, insert_at_line, replace_all};
pub use store::{AgentMemory, SharedMemory, shared};
pub use tools::{
    BLOCK_NOT_FOUND, INSERT_SUCCESS, MemoryInsertTool, MemoryReplaceTool, REPLACE_SUCCESS,
};
