//! Launch decision domain model.
//!
//! The launch shell produces exactly one [`LaunchDecision`] per process
//! start. The decision is derived from persisted state and never persisted
//! itself.

use std::fmt::{Display, Formatter};

use crate::user::UserRecord;

/// Which screen greets the user after the loading splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchDecision {
    /// True first launch on this device: show the onboarding flow.
    ShowOnboarding,
    /// Returning device or known user: go straight to home.
    ShowHome,
}

impl LaunchDecision {
    /// Route name handed to the navigation layer.
    pub fn initial_route(self) -> InitialRoute {
        match self {
            LaunchDecision::ShowOnboarding => InitialRoute::OnboardingScreen,
            LaunchDecision::ShowHome => InitialRoute::Home,
        }
    }
}

/// Initial route names understood by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialRoute {
    Home,
    OnboardingScreen,
}

impl InitialRoute {
    pub fn as_str(self) -> &'static str {
        match self {
            InitialRoute::Home => "Home",
            InitialRoute::OnboardingScreen => "OnboardingScreen",
        }
    }
}

impl Display for InitialRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one launch resolution: the decision plus the user that was
/// restored into session state, if any.
#[derive(Debug, Clone)]
pub struct LaunchResolution {
    pub decision: LaunchDecision,
    pub restored_user: Option<UserRecord>,
}

impl LaunchResolution {
    /// Fail-open outcome: home screen, nobody restored.
    pub fn fallback() -> Self {
        Self {
            decision: LaunchDecision::ShowHome,
            restored_user: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_maps_to_route_names() {
        assert_eq!(LaunchDecision::ShowHome.initial_route().as_str(), "Home");
        assert_eq!(
            LaunchDecision::ShowOnboarding.initial_route().as_str(),
            "OnboardingScreen"
        );
    }

    #[test]
    fn test_fallback_is_home_with_no_user() {
        let fallback = LaunchResolution::fallback();
        assert_eq!(fallback.decision, LaunchDecision::ShowHome);
        assert!(fallback.restored_user.is_none());
    }
}
