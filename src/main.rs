//! MercurSpace launch shell.
//!
//! Composition glue: builds the file-backed adapters, the shared session
//! state, and the bootstrap sequencer, runs the startup sequence, and hands
//! the resolved initial route to whatever view layer embeds this shell.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ms_app::{BootstrapSequencer, HydrateState, ResolveLaunch, SessionState};
use ms_infra::{FileDeviceIdentity, FileKeyValueStore};

/// Initialize the tracing subscriber. Respects `RUST_LOG`, defaults to info.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("mercurspace"))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let base_dir = data_dir();
    info!(dir = %base_dir.display(), "starting launch shell");

    let storage = Arc::new(FileKeyValueStore::with_defaults(base_dir.clone()));
    let identity = Arc::new(FileDeviceIdentity::with_defaults(base_dir));
    let session = Arc::new(SessionState::new());

    let resolve = Arc::new(ResolveLaunch::new(
        storage.clone(),
        identity,
        session.clone(),
    ));
    let hydrate = Arc::new(HydrateState::new(storage, session.clone()));
    let sequencer = BootstrapSequencer::new(resolve, hydrate);

    let mut phase = sequencer.subscribe();
    let resolution = sequencer.run().await;
    ms_app::wait_ready(&mut phase).await;

    info!(
        route = %resolution.decision.initial_route(),
        restored_user = resolution.restored_user.is_some(),
        "launch decision resolved"
    );

    Ok(())
}
