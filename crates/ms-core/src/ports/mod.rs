//! Port interfaces for the application layer.
//!
//! Ports define the contract between the launch use cases and infrastructure
//! implementations, keeping the decision logic independent of how storage and
//! device identity are actually provided.

pub mod device_identity;
pub mod errors;
pub mod key_value;

pub use device_identity::DeviceIdentityPort;
pub use errors::{IdentityError, LaunchError, StorageError};
pub use key_value::KeyValueStorePort;
