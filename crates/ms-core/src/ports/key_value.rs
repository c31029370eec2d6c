//! Key-value storage port.
//!
//! String keys, string values (JSON-serialized where structured). Implemented
//! by the infrastructure layer; faked in use-case tests.

use async_trait::async_trait;

use super::errors::StorageError;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// The write is durable before this returns.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Deleting an absent key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
