//! Key-value store adapters.

pub mod file_store;
pub mod memory;

pub use file_store::{FileKeyValueStore, DEFAULT_STORAGE_FILE};
pub use memory::MemoryKeyValueStore;
