//! Device identity port.

use async_trait::async_trait;

use super::errors::IdentityError;
use crate::DeviceId;

#[async_trait]
pub trait DeviceIdentityPort: Send + Sync {
    /// Return the stable per-install device identifier.
    ///
    /// Must resolve to the same id for the life of the install.
    async fn device_id(&self) -> Result<DeviceId, IdentityError>;
}
