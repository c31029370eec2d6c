//! Per-install device identity provider.
//!
//! The identity is a UUID generated on first lookup and persisted to a
//! single-line file, so every later lookup (and every later process start)
//! resolves to the same id for the life of the install.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::info;

use ms_core::ports::{DeviceIdentityPort, IdentityError};
use ms_core::DeviceId;

pub const DEFAULT_DEVICE_ID_FILE: &str = ".device_id";

pub struct FileDeviceIdentity {
    id_file_path: PathBuf,
    // First lookup generates and persists; serialize it so concurrent
    // callers cannot mint two different ids.
    init_lock: Mutex<()>,
}

impl FileDeviceIdentity {
    /// Create provider with custom file path
    pub fn new(id_file_path: PathBuf) -> Self {
        Self {
            id_file_path,
            init_lock: Mutex::new(()),
        }
    }

    /// Create provider with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_DEVICE_ID_FILE))
    }

    async fn load_persisted(&self) -> Result<Option<DeviceId>, IdentityError> {
        if !self.id_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.id_file_path).await?;
        let id_str = content.trim();
        if id_str.is_empty() {
            return Ok(None);
        }

        uuid::Uuid::parse_str(id_str).map_err(|e| {
            IdentityError::Malformed(format!(
                "invalid device id in {}: {e}",
                self.id_file_path.display()
            ))
        })?;

        Ok(Some(DeviceId::from(id_str)))
    }

    async fn persist(&self, id: &DeviceId) -> Result<(), IdentityError> {
        if let Some(parent) = self.id_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write through a temp file and rename so a crash mid-write never
        // leaves a truncated id behind; fall back to a direct write when
        // rename is not available on the filesystem.
        let tmp_path = self.id_file_path.with_extension("tmp");
        fs::write(&tmp_path, id.as_str()).await?;
        if fs::rename(&tmp_path, &self.id_file_path).await.is_err() {
            fs::write(&self.id_file_path, id.as_str()).await?;
            let _ = fs::remove_file(&tmp_path).await;
        }

        Ok(())
    }
}

#[async_trait]
impl DeviceIdentityPort for FileDeviceIdentity {
    async fn device_id(&self) -> Result<DeviceId, IdentityError> {
        let _guard = self.init_lock.lock().await;

        if let Some(id) = self.load_persisted().await? {
            return Ok(id);
        }

        let id = DeviceId::new(uuid::Uuid::new_v4().to_string());
        self.persist(&id).await?;
        info!(device = %id, "generated device identity for this install");
        Ok(id)
    }
}
