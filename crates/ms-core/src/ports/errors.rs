//! Error taxonomy for the launch shell.
//!
//! Everything here is caught at the launch-router boundary, logged as a
//! diagnostic, and collapsed to the fail-open outcome. Nothing is surfaced
//! to the user interface and nothing is retried within one process start.

use thiserror::Error;

/// Failure raised by a key-value store adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backing data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failure raised by a device identity adapter.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("device identity i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("device identity record is malformed: {0}")]
    Malformed(String),
    #[error("device identity provider returned an empty id")]
    Empty,
}

/// Everything that can go wrong inside one launch resolution.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("identity lookup failed: {0}")]
    IdentityLookup(#[from] IdentityError),
    #[error("storage read failed: {0}")]
    StorageRead(#[source] StorageError),
    #[error("storage write failed: {0}")]
    StorageWrite(#[source] StorageError),
    #[error("stored user record is malformed: {0}")]
    Deserialization(#[from] serde_json::Error),
}
