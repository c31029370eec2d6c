//! # ms-core
//!
//! Core domain models and launch-routing logic for MercurSpace.
//!
//! This crate contains the pure decision model without any infrastructure
//! dependencies.

// Public module exports
pub mod ids;
pub mod keys;
pub mod launch;
pub mod ports;
pub mod state;
pub mod user;

// Re-export commonly used types at the crate root
pub use ids::DeviceId;
pub use launch::{InitialRoute, LaunchDecision, LaunchResolution};
pub use state::AppStateSnapshot;
pub use user::UserRecord;
