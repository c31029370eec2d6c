//! MercurSpace Application Orchestration Layer
//!
//! This crate contains the startup use cases and the bootstrap sequencer.

pub mod bootstrap;
pub mod session;
pub mod usecases;

pub use bootstrap::{wait_ready, AppPhase, BootstrapSequencer};
pub use session::SessionState;
pub use usecases::{HydrateState, ResolveLaunch};
