//! # ms-infra
//!
//! Infrastructure adapters for the MercurSpace launch shell: file-backed
//! key-value storage, an in-memory store for embedding and tests, and the
//! per-install device identity provider.

pub mod device;
pub mod kv;

pub use device::{FileDeviceIdentity, DEFAULT_DEVICE_ID_FILE};
pub use kv::{FileKeyValueStore, MemoryKeyValueStore, DEFAULT_STORAGE_FILE};
