//! Startup bootstrap sequencer.
//!
//! Coordinates the two independent startup tasks and exposes the readiness
//! signal the view layer blocks on:
//!
//! - state hydration is spawned fire-and-forget; its outcome is logged and
//!   never gates readiness;
//! - launch resolution is awaited, and its completion (success or handled
//!   failure) is the only trigger for the `Initializing -> Ready` edge.
//!
//! The phase transition is terminal; there is no way back to `Initializing`
//! and no retry of the sequence within one process lifetime.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use ms_core::LaunchResolution;

use crate::usecases::{HydrateState, ResolveLaunch};

/// Readiness of the launch shell as observed by the view layer.
///
/// While `Initializing` the consumer renders only a loading indicator; no
/// navigation stack is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Initializing,
    Ready,
}

pub struct BootstrapSequencer {
    resolve_launch: Arc<ResolveLaunch>,
    hydrate_state: Arc<HydrateState>,
    phase_tx: watch::Sender<AppPhase>,
}

impl BootstrapSequencer {
    pub fn new(resolve_launch: Arc<ResolveLaunch>, hydrate_state: Arc<HydrateState>) -> Self {
        let (phase_tx, _) = watch::channel(AppPhase::Initializing);
        Self {
            resolve_launch,
            hydrate_state,
            phase_tx,
        }
    }

    /// Subscribe to phase transitions. Receivers created before `run` see
    /// `Initializing` first, then the single edge to `Ready`.
    pub fn subscribe(&self) -> watch::Receiver<AppPhase> {
        self.phase_tx.subscribe()
    }

    /// Run the startup sequence. Invoked exactly once per process start.
    pub async fn run(&self) -> LaunchResolution {
        let hydrate = Arc::clone(&self.hydrate_state);
        tokio::spawn(async move {
            if let Err(err) = hydrate.execute().await {
                warn!(error = %err, "state hydration failed");
            }
        });

        let resolution = self.resolve_launch.execute().await;

        // Readiness gates on resolution alone; hydration may still be running.
        self.phase_tx.send_replace(AppPhase::Ready);
        info!(route = %resolution.decision.initial_route(), "bootstrap complete");
        resolution
    }
}

/// Await the `Ready` edge on a phase receiver.
///
/// Returns immediately when the sequencer already finished; also returns if
/// the sequencer was dropped, so callers cannot hang on a dead channel.
pub async fn wait_ready(rx: &mut watch::Receiver<AppPhase>) {
    while *rx.borrow_and_update() != AppPhase::Ready {
        if rx.changed().await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use ms_core::ports::{KeyValueStorePort, StorageError};
    use ms_core::{keys, LaunchDecision};

    use crate::session::SessionState;
    use crate::usecases::resolve_launch::ResolveLaunch;

    struct FixedIdentity;

    #[async_trait]
    impl ms_core::ports::DeviceIdentityPort for FixedIdentity {
        async fn device_id(&self) -> Result<ms_core::DeviceId, ms_core::ports::IdentityError> {
            Ok(ms_core::DeviceId::from("dev-boot"))
        }
    }

    /// Store that parks reads of the hydration document on a `Notify` that
    /// is never signalled, keeping the hydration task pending forever.
    struct StalledHydrationStore {
        entries: tokio::sync::Mutex<HashMap<String, String>>,
        stall: Notify,
    }

    impl StalledHydrationStore {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                entries: tokio::sync::Mutex::new(
                    entries
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                ),
                stall: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl KeyValueStorePort for StalledHydrationStore {
        async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            if key == keys::APP_STATE_KEY {
                self.stall.notified().await;
            }
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .lock()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.entries.lock().await.remove(key);
            Ok(())
        }
    }

    fn sequencer_with_store(
        store: Arc<StalledHydrationStore>,
    ) -> (BootstrapSequencer, Arc<SessionState>) {
        let session = Arc::new(SessionState::new());
        let resolve = Arc::new(ResolveLaunch::new(
            store.clone(),
            Arc::new(FixedIdentity),
            session.clone(),
        ));
        let hydrate = Arc::new(HydrateState::new(store, session.clone()));
        (BootstrapSequencer::new(resolve, hydrate), session)
    }

    #[tokio::test]
    async fn test_subscriber_sees_initializing_then_ready() {
        let store = Arc::new(StalledHydrationStore::new(&[]));
        let (sequencer, _) = sequencer_with_store(store);

        let mut phase = sequencer.subscribe();
        assert_eq!(*phase.borrow(), AppPhase::Initializing);

        let resolution = sequencer.run().await;
        assert_eq!(resolution.decision, LaunchDecision::ShowOnboarding);

        wait_ready(&mut phase).await;
        assert_eq!(*phase.borrow(), AppPhase::Ready);
    }

    #[tokio::test]
    async fn test_readiness_does_not_wait_for_hydration() {
        // Hydration is parked forever; the sequencer must still become
        // ready once resolution completes.
        let store = Arc::new(StalledHydrationStore::new(&[(
            keys::ONBOARDING_SEEN_KEY,
            "true",
        )]));
        let (sequencer, session) = sequencer_with_store(store);

        let mut phase = sequencer.subscribe();
        let resolution = tokio::time::timeout(Duration::from_secs(5), sequencer.run())
            .await
            .expect("bootstrap must not block on hydration");

        assert_eq!(resolution.decision, LaunchDecision::ShowHome);
        wait_ready(&mut phase).await;

        // The stalled hydration task never applied a snapshot.
        assert_eq!(session.snapshot().await, ms_core::AppStateSnapshot::default());
    }

    #[tokio::test]
    async fn test_wait_ready_returns_after_sequencer_dropped() {
        let store = Arc::new(StalledHydrationStore::new(&[]));
        let (sequencer, _) = sequencer_with_store(store);
        let mut phase = sequencer.subscribe();
        drop(sequencer);

        // Channel closed while still Initializing; must not hang.
        tokio::time::timeout(Duration::from_secs(1), wait_ready(&mut phase))
            .await
            .expect("wait_ready must return on a closed channel");
    }

    #[tokio::test]
    async fn test_run_restores_user_before_ready() {
        let store = Arc::new(StalledHydrationStore::new(&[(
            "currentUser_dev-boot",
            r#"{"id":"u-9","username":"lyra"}"#,
        )]));
        let (sequencer, session) = sequencer_with_store(store);

        let resolution = sequencer.run().await;

        assert_eq!(resolution.decision, LaunchDecision::ShowHome);
        assert_eq!(session.current_user().await.map(|u| u.id), Some("u-9".into()));
    }
}
