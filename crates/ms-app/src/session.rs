//! Shared session state seeded during startup.
//!
//! Replaces the ambient global store with an explicitly owned container
//! passed by handle into the use cases.
//!
//! ## Startup write ownership
//! Each field has exactly one writer while the app is booting:
//! - `current_user` is written only by the launch router's restore step.
//! - `snapshot` is written only by the hydration task.
//!
//! The two startup tasks therefore never race on the same field; keep it
//! that way when adding fields.

use tokio::sync::RwLock;

use ms_core::{AppStateSnapshot, UserRecord};

#[derive(Debug, Default)]
pub struct SessionState {
    current_user: RwLock<Option<UserRecord>>,
    snapshot: RwLock<AppStateSnapshot>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current user, if one was restored or signed in.
    pub async fn current_user(&self) -> Option<UserRecord> {
        self.current_user.read().await.clone()
    }

    pub async fn set_current_user(&self, user: UserRecord) {
        *self.current_user.write().await = Some(user);
    }

    /// Hydrated application-state slice.
    pub async fn snapshot(&self) -> AppStateSnapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn apply_snapshot(&self, snapshot: AppStateSnapshot) {
        *self.snapshot.write().await = snapshot;
    }
}
