//! Launch router.
//!
//! Decides, once per process start, whether the view layer should open on
//! the onboarding flow or the home screen, restoring the last-known user
//! into session state along the way.
//!
//! The evaluation order is the contract: a persisted user wins over the
//! onboarding marker, and the marker is only ever written on a true first
//! launch. Once written it is never cleared here, so `ShowOnboarding` can
//! be produced at most once per device.

use std::sync::Arc;

use tracing::{debug, info, warn};

use ms_core::keys;
use ms_core::ports::{DeviceIdentityPort, IdentityError, KeyValueStorePort, LaunchError};
use ms_core::{LaunchDecision, LaunchResolution, UserRecord};

use crate::session::SessionState;

/// Use case resolving the initial route at startup.
pub struct ResolveLaunch {
    storage: Arc<dyn KeyValueStorePort>,
    identity: Arc<dyn DeviceIdentityPort>,
    session: Arc<SessionState>,
}

impl ResolveLaunch {
    pub fn new(
        storage: Arc<dyn KeyValueStorePort>,
        identity: Arc<dyn DeviceIdentityPort>,
        session: Arc<SessionState>,
    ) -> Self {
        Self {
            storage,
            identity,
            session,
        }
    }

    /// Resolve the launch decision.
    ///
    /// Never fails: any identity, storage, or deserialization error is
    /// logged as a diagnostic and collapsed to the fail-open outcome
    /// (home screen, no restored user). No retry within this process start.
    pub async fn execute(&self) -> LaunchResolution {
        match self.try_resolve().await {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(error = %err, "launch resolution failed, falling open to home");
                LaunchResolution::fallback()
            }
        }
    }

    async fn try_resolve(&self) -> Result<LaunchResolution, LaunchError> {
        let device_id = self.identity.device_id().await?;
        if device_id.is_empty() {
            return Err(LaunchError::IdentityLookup(IdentityError::Empty));
        }

        let user_key = keys::current_user_key(&device_id);
        let stored_user = self
            .storage
            .get_item(&user_key)
            .await
            .map_err(LaunchError::StorageRead)?;
        let onboarding_seen = self
            .storage
            .get_item(keys::ONBOARDING_SEEN_KEY)
            .await
            .map_err(LaunchError::StorageRead)?;

        if let Some(raw) = stored_user {
            let user: UserRecord = serde_json::from_str(&raw)?;
            self.session.set_current_user(user.clone()).await;
            debug!(user = %user.id, "restored persisted user, routing to home");
            return Ok(LaunchResolution {
                decision: LaunchDecision::ShowHome,
                restored_user: Some(user),
            });
        }

        // Presence-only check: the marker's stored value is never parsed.
        if onboarding_seen.is_some() {
            debug!("onboarding already shown on this device, routing to home");
            return Ok(LaunchResolution {
                decision: LaunchDecision::ShowHome,
                restored_user: None,
            });
        }

        // True first launch. The marker is durable before we hand the
        // decision back, so a relaunch sees it.
        self.storage
            .set_item(keys::ONBOARDING_SEEN_KEY, keys::ONBOARDING_SEEN_VALUE)
            .await
            .map_err(LaunchError::StorageWrite)?;
        info!(device = %device_id, "first launch on this device, routing to onboarding");
        Ok(LaunchResolution {
            decision: LaunchDecision::ShowOnboarding,
            restored_user: None,
        })
    }
}
