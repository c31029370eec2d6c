//! Startup use cases.

pub mod hydrate_state;
pub mod resolve_launch;

pub use hydrate_state::HydrateState;
pub use resolve_launch::ResolveLaunch;
