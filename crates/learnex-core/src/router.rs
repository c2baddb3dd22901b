//! Screen selection, gated by session and onboarding status.

use crate::models::Role;

/// Main screens, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Mentors,
    Progress,
    Forum,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Mentors,
        Screen::Progress,
        Screen::Forum,
        Screen::Profile,
    ];

    /// Selector string, as accepted by `parse`
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Mentors => "mentors",
            Screen::Progress => "progress",
            Screen::Forum => "forum",
            Screen::Profile => "profile",
        }
    }

    /// Unknown selectors fall back to the dashboard.
    pub fn parse(selector: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(selector.trim()))
            .unwrap_or_default()
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Dashboard => 0,
            Screen::Mentors => 1,
            Screen::Progress => 2,
            Screen::Forum => 3,
            Screen::Profile => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Navigation label; the people screen reads differently per role
    pub fn label(&self, role: Role) -> &'static str {
        match (self, role) {
            (Screen::Dashboard, _) => "Dashboard",
            (Screen::Mentors, Role::Learner) => "Find Mentor",
            (Screen::Mentors, Role::Mentor) => "Find Students",
            (Screen::Progress, _) => "Progress",
            (Screen::Forum, _) => "Community",
            (Screen::Profile, _) => "Profile",
        }
    }
}

/// What the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Credentials,
    Onboarding,
    Screen(Screen),
}

/// Gate the selected screen on authentication, then onboarding.
pub fn route(authenticated: bool, onboarded: bool, screen: Screen) -> View {
    if !authenticated {
        View::Credentials
    } else if !onboarded {
        View::Onboarding
    } else {
        View::Screen(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_selectors() {
        for screen in Screen::ALL {
            assert_eq!(Screen::parse(screen.id()), screen);
        }
        assert_eq!(Screen::parse("Forum"), Screen::Forum);
    }

    #[test]
    fn test_parse_unknown_defaults_to_dashboard() {
        assert_eq!(Screen::parse(""), Screen::Dashboard);
        assert_eq!(Screen::parse("settings"), Screen::Dashboard);
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Screen::Profile.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.prev(), Screen::Profile);
        assert_eq!(Screen::Mentors.next(), Screen::Progress);
        for screen in Screen::ALL {
            assert_eq!(screen.next().prev(), screen);
            assert_eq!(Screen::from_index(screen.index()), Some(screen));
        }
        assert_eq!(Screen::from_index(5), None);
    }

    #[test]
    fn test_people_label_depends_on_role() {
        assert_eq!(Screen::Mentors.label(Role::Learner), "Find Mentor");
        assert_eq!(Screen::Mentors.label(Role::Mentor), "Find Students");
        assert_eq!(Screen::Profile.label(Role::Mentor), "Profile");
    }

    #[test]
    fn test_route_gating_order() {
        assert_eq!(route(false, false, Screen::Forum), View::Credentials);
        // Onboarded without a session is still the credential view
        assert_eq!(route(false, true, Screen::Forum), View::Credentials);
        assert_eq!(route(true, false, Screen::Forum), View::Onboarding);
        assert_eq!(route(true, true, Screen::Forum), View::Screen(Screen::Forum));
    }
}
