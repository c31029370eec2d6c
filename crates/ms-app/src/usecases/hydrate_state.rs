//! Application-state hydration.
//!
//! Fire-and-forget startup collaborator of the launch router: loads the
//! persisted application-state snapshot into the session container. Runs
//! concurrently with launch resolution and never gates readiness.

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use ms_core::keys;
use ms_core::ports::KeyValueStorePort;
use ms_core::AppStateSnapshot;

use crate::session::SessionState;

/// Use case hydrating the persisted application-state slice.
pub struct HydrateState {
    storage: Arc<dyn KeyValueStorePort>,
    session: Arc<SessionState>,
}

impl HydrateState {
    pub fn new(storage: Arc<dyn KeyValueStorePort>, session: Arc<SessionState>) -> Self {
        Self { storage, session }
    }

    /// Load the snapshot document and apply it to session state.
    ///
    /// A missing document yields defaults. Writes only the snapshot field;
    /// the current-user field belongs to the launch router during startup.
    pub async fn execute(&self) -> anyhow::Result<()> {
        let raw = self.storage.get_item(keys::APP_STATE_KEY).await?;

        let snapshot = match raw {
            Some(raw) => serde_json::from_str::<AppStateSnapshot>(&raw)
                .context("malformed persisted app state")?,
            None => AppStateSnapshot::default(),
        };

        self.session.apply_snapshot(snapshot).await;
        debug!("application state hydrated");
        Ok(())
    }
}
