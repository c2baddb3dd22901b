//! Application state and the transitions over it.
//!
//! `Store` is the only owner of the session, the profile and any onboarding
//! progress. Front-ends read it freely but change it only through
//! [`Store::dispatch`].
//!
//! Auth calls are asynchronous, so every request is issued a ticket when it
//! starts. A completion is applied only if it carries the most recent ticket;
//! anything older has been superseded and is dropped.

use tracing::{debug, info, warn};

use crate::auth::Session;
use crate::error::{AuthError, OnboardingError};
use crate::models::{Profile, Role};
use crate::onboarding::{OnboardingEvent, OnboardingFlow};
use crate::router::{route, Screen, View};

/// Identifies one outstanding auth request
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Federated,
    Register,
    Logout,
}

impl AuthKind {
    pub fn name(&self) -> &'static str {
        match self {
            AuthKind::Login => "login",
            AuthKind::Federated => "federated login",
            AuthKind::Register => "registration",
            AuthKind::Logout => "logout",
        }
    }

    /// Status line shown once the request succeeds
    pub fn success_message(&self) -> &'static str {
        match self {
            AuthKind::Login => "Login successful!",
            AuthKind::Federated => "Google login successful!",
            AuthKind::Register => "Account created successfully!",
            AuthKind::Logout => "Signed out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AuthStarted(AuthKind),
    AuthSucceeded { ticket: Ticket, session: Session },
    AuthFailed { ticket: Ticket, error: AuthError },
    LoggedOut { ticket: Ticket },
    Onboarding(OnboardingEvent),
    GrantExperience(u32),
    SwitchRole(Role),
    ResetProgress,
    SelectScreen(Screen),
}

/// What a dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// An auth request was started under this ticket
    Issued(Ticket),
    /// A completion for a superseded request
    Stale,
    /// Preconditions not met; nothing changed
    Ignored,
    Rejected(OnboardingError),
}

#[derive(Debug, Default)]
pub struct Store {
    session: Option<Session>,
    profile: Option<Profile>,
    onboarding: Option<OnboardingFlow>,
    screen: Screen,
    latest_ticket: Ticket,
    pending: Option<(Ticket, AuthKind)>,
    auth_error: Option<AuthError>,
}

impl Store {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    // ===== Reads =====

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn onboarding(&self) -> Option<&OnboardingFlow> {
        self.onboarding.as_ref()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The kind of request currently in flight, if any
    pub fn pending(&self) -> Option<AuthKind> {
        self.pending.map(|(_, kind)| kind)
    }

    pub fn auth_error(&self) -> Option<&AuthError> {
        self.auth_error.as_ref()
    }

    pub fn view(&self) -> View {
        route(self.is_authenticated(), self.is_onboarded(), self.screen)
    }

    // ===== Transitions =====

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::AuthStarted(kind) => {
                self.latest_ticket += 1;
                let ticket = self.latest_ticket;
                if let Some((old, old_kind)) = self.pending.replace((ticket, kind)) {
                    debug!(superseded = old, kind = old_kind.name(), "Auth request superseded");
                }
                self.auth_error = None;
                debug!(ticket, kind = kind.name(), "Auth request started");
                Outcome::Issued(ticket)
            }
            Action::AuthSucceeded { ticket, session } => {
                if !self.take_pending(ticket) {
                    return Outcome::Stale;
                }
                info!(session_id = %session.id, provider = %session.provider, "Signed in");
                // A new identity starts from scratch
                self.onboarding = Some(OnboardingFlow::for_session(&session));
                self.profile = None;
                self.session = Some(session);
                Outcome::Applied
            }
            Action::AuthFailed { ticket, error } => {
                if !self.take_pending(ticket) {
                    return Outcome::Stale;
                }
                warn!(error = %error, "Auth request failed");
                self.auth_error = Some(error);
                Outcome::Applied
            }
            Action::LoggedOut { ticket } => {
                if !self.take_pending(ticket) {
                    return Outcome::Stale;
                }
                info!("Signed out");
                self.clear_identity();
                Outcome::Applied
            }
            Action::Onboarding(event) => self.apply_onboarding(event),
            Action::GrantExperience(amount) => self.with_profile(|p| p.grant_experience(amount)),
            Action::SwitchRole(role) => self.with_profile(|p| p.switch_role(role)),
            Action::ResetProgress => self.with_profile(Profile::reset_progress),
            Action::SelectScreen(screen) => {
                self.screen = screen;
                Outcome::Applied
            }
        }
    }

    fn take_pending(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some((current, _)) if current == ticket => {
                self.pending = None;
                true
            }
            _ => {
                debug!(ticket, latest = self.latest_ticket, "Dropping stale auth completion");
                false
            }
        }
    }

    fn clear_identity(&mut self) {
        self.session = None;
        self.profile = None;
        self.onboarding = None;
        self.auth_error = None;
    }

    fn apply_onboarding(&mut self, event: OnboardingEvent) -> Outcome {
        let (Some(session), Some(flow)) = (self.session.as_ref(), self.onboarding.as_mut()) else {
            return Outcome::Ignored;
        };
        if let Err(e) = flow.apply(event) {
            debug!(error = %e, "Onboarding event rejected");
            return Outcome::Rejected(e);
        }
        if let Some(profile) = flow.profile_for(session) {
            info!(role = %profile.role, skill = %profile.primary_skill, "Onboarding complete");
            self.profile = Some(profile);
            self.onboarding = None;
        }
        Outcome::Applied
    }

    fn with_profile(&mut self, f: impl FnOnce(&mut Profile)) -> Outcome {
        match self.profile.as_mut() {
            Some(profile) => {
                f(profile);
                Outcome::Applied
            }
            None => Outcome::Ignored,
        }
    }
}
