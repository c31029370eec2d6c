//! File-based key-value store.
//!
//! Persists the whole store as a single JSON object file in the application
//! data directory. Reads tolerate a missing or empty file; all file access
//! is serialized under a mutex and writes are synced to disk before
//! returning.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use ms_core::ports::{KeyValueStorePort, StorageError};

pub const DEFAULT_STORAGE_FILE: &str = ".mercurspace_storage";

pub struct FileKeyValueStore {
    store_file_path: PathBuf,
    // Serializes all file access: writes are read-modify-write and would
    // drop each other's entries, and a read overlapping a write could
    // observe a truncated file. The launch router and the hydration task
    // share one store and run concurrently.
    file_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create store with custom file path
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            file_lock: Mutex::new(()),
        }
    }

    /// Create store with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self::new(base_dir.join(filename.into()))
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORAGE_FILE))
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn load_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.store_file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.store_file_path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let entries: BTreeMap<String, String> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    async fn persist_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(entries)?;

        // Write through a temp file and rename so neither a crash mid-write
        // nor a concurrent reader ever sees a truncated store; fall back to
        // a direct write when rename is not available on the filesystem.
        let tmp_path = self.store_file_path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        if fs::rename(&tmp_path, &self.store_file_path).await.is_err() {
            fs::write(&self.store_file_path, json.as_bytes()).await?;
            let _ = fs::remove_file(&tmp_path).await;
        }

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.file_lock.lock().await;

        let entries = self.load_entries().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.file_lock.lock().await;

        let mut entries = self.load_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist_entries(&entries).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.file_lock.lock().await;

        let mut entries = self.load_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist_entries(&entries).await
    }
}
