//! Persisted key-value schema.
//!
//! Key names are shared with the external flows that seed the user record;
//! changing them orphans data already on devices.

use crate::ids::DeviceId;

/// Global marker set the first time onboarding is shown on a device.
///
/// Presence-only: readers never parse the stored value, any stored value
/// (including the empty string) counts as "onboarding was shown".
pub const ONBOARDING_SEEN_KEY: &str = "isFuncOnbWasVisible";

/// Value written for the onboarding marker.
pub const ONBOARDING_SEEN_VALUE: &str = "true";

/// Document holding the hydrated application-state snapshot.
pub const APP_STATE_KEY: &str = "mercurAppState";

/// Key under which the last-known user for a device is stored.
///
/// Namespaced by device so installs sharing a storage backend stay isolated.
pub fn current_user_key(device_id: &DeviceId) -> String {
    format!("currentUser_{device_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_key_is_device_namespaced() {
        let id = DeviceId::from("abc123");
        assert_eq!(current_user_key(&id), "currentUser_abc123");
    }

    #[test]
    fn test_onboarding_marker_schema() {
        assert_eq!(ONBOARDING_SEEN_KEY, "isFuncOnbWasVisible");
        assert_eq!(ONBOARDING_SEEN_VALUE, "true");
    }
}
