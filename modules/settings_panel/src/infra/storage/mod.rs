//! Storage layer - override store implementations

pub mod memory;

pub use memory::{MemoryOverrideStore, MemoryStoreProvider};
