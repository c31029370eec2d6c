//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last-known signed-in user, persisted by the account flows and read back
/// once at startup.
///
/// The stored JSON is written by external collaborators; unknown fields are
/// ignored on deserialize so old installs keep working when the record grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
}
