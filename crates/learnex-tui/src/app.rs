//! Application state management for the Learnex TUI.
//!
//! `App` wraps the core `Store` with everything that only matters on screen:
//! form buffers, list selections, search text and the channel that mock auth
//! tasks report back on.

use std::sync::Arc;

use learnex_core::auth::{
    check_login_form, check_signup_form, rate_password, Credentials, IdentityProvider,
    MockIdentityProvider, PasswordStrength, Registration, Session,
};
use learnex_core::catalog;
use learnex_core::models::{
    complete_quest, filter_posts, search, ForumCategory, ForumPost, Person, ProgressReport,
    Quest, RoadmapSummary, Role, Skill,
};
use learnex_core::onboarding::{OnboardingEvent, OnboardingStep};
use learnex_core::router::{Screen, View};
use learnex_core::store::{AuthKind, Outcome, Ticket};
use learnex_core::{Action, AuthError, Config, Store};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the auth result channel. At most one request is live,
/// but superseded ones may still report in.
const CHANNEL_BUFFER_SIZE: usize = 8;

const MAX_NAME_LENGTH: usize = 50;

const MAX_EMAIL_LENGTH: usize = 100;

/// Room for password managers and passphrases
const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    ShowingHelp,
    ViewingQuest,
    ConfirmingQuit,
    Quitting,
}

/// Which credential form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// Focusable fields, top to bottom
    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthMode::SignIn => &[AuthField::Email, AuthField::Password, AuthField::Submit],
            AuthMode::SignUp => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Password,
                AuthField::Confirm,
                AuthField::Submit,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    Confirm,
    Submit,
}

/// Sign-in / sign-up form buffers
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub focus: AuthField,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub error: Option<String>,
}

impl AuthForm {
    pub fn new(email: Option<String>) -> Self {
        let email = email.unwrap_or_default();
        let focus = if email.is_empty() {
            AuthField::Email
        } else {
            AuthField::Password
        };
        Self {
            mode: AuthMode::SignIn,
            focus,
            name: String::new(),
            email,
            password: String::new(),
            confirm: String::new(),
            error: None,
        }
    }

    /// Switch between Sign In and Sign Up. Passwords never carry over.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.other();
        self.focus = self.mode.fields()[0];
        self.error = None;
        self.clear_secrets();
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.mode.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    pub fn next_field(&mut self) {
        self.move_focus(true);
    }

    pub fn prev_field(&mut self) {
        self.move_focus(false);
    }

    fn focused_buffer(&mut self) -> Option<(&mut String, usize)> {
        match self.focus {
            AuthField::Name => Some((&mut self.name, MAX_NAME_LENGTH)),
            AuthField::Email => Some((&mut self.email, MAX_EMAIL_LENGTH)),
            AuthField::Password => Some((&mut self.password, MAX_PASSWORD_LENGTH)),
            AuthField::Confirm => Some((&mut self.confirm, MAX_PASSWORD_LENGTH)),
            AuthField::Submit => None,
        }
    }

    /// Type into the focused field. Returns false if the character was refused.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.focused_buffer() {
            Some((buffer, max)) if can_add_char(buffer.chars().count(), max, c) => {
                buffer.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn pop_char(&mut self) {
        if let Some((buffer, _)) = self.focused_buffer() {
            buffer.pop();
        }
    }

    /// Strength meter, shown only while signing up
    pub fn strength(&self) -> Option<PasswordStrength> {
        match self.mode {
            AuthMode::SignUp => rate_password(&self.password),
            AuthMode::SignIn => None,
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        match self.mode {
            AuthMode::SignIn => check_login_form(&self.email, &self.password),
            AuthMode::SignUp => {
                check_signup_form(&self.name, &self.email, &self.password, &self.confirm)
            }
        }
    }

    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm.clear();
    }
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Results sent back from spawned identity provider calls
#[derive(Debug)]
enum AuthResult {
    SignedIn {
        ticket: Ticket,
        kind: AuthKind,
        result: Result<Session, AuthError>,
    },
    SignedOut {
        ticket: Ticket,
        result: Result<(), AuthError>,
    },
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    // Core services
    pub config: Config,
    pub store: Store,
    provider: Arc<dyn IdentityProvider>,

    // UI State
    pub state: AppState,
    pub form: AuthForm,
    pub onboarding_selection: usize,
    pub search_query: String,
    pub forum_category: Option<ForumCategory>,

    // Selection indices
    pub quest_selection: usize,
    pub people_selection: usize,
    pub forum_selection: usize,

    // Mock content for the signed-in profile
    pub quests: Vec<Quest>,
    pub people: Vec<Person>,
    pub posts: Vec<ForumPost>,

    // Background task channel
    auth_rx: mpsc::Receiver<AuthResult>,
    auth_tx: mpsc::Sender<AuthResult>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance, falling back to default config
    pub fn new() -> Self {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };
        let provider = Arc::new(MockIdentityProvider::new(config.latency));
        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: Config, provider: Arc<dyn IdentityProvider>) -> Self {
        let screen = config
            .default_screen
            .as_deref()
            .map(Screen::parse)
            .unwrap_or_default();
        debug!(screen = screen.id(), "Initial screen");

        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let form = AuthForm::new(config.email.clone());

        Self {
            config,
            store: Store::new(screen),
            provider,

            state: AppState::Normal,
            form,
            onboarding_selection: 0,
            search_query: String::new(),
            forum_category: None,

            quest_selection: 0,
            people_selection: 0,
            forum_selection: 0,

            quests: Vec::new(),
            people: Vec::new(),
            posts: Vec::new(),

            auth_rx: rx,
            auth_tx: tx,

            status_message: None,
        }
    }

    pub fn view(&self) -> View {
        self.store.view()
    }

    pub fn role(&self) -> Role {
        self.store
            .profile()
            .map(|p| p.role)
            .unwrap_or(Role::Learner)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Validate the credential form and hand it to the identity provider
    pub fn submit_auth_form(&mut self) {
        if self.store.is_loading() {
            return;
        }
        if let Err(e) = self.form.validate() {
            debug!(error = %e, "Credential form rejected");
            self.form.error = Some(e.to_string());
            return;
        }
        self.form.error = None;

        let provider = Arc::clone(&self.provider);
        match self.form.mode {
            AuthMode::SignIn => {
                let credentials =
                    Credentials::new(self.form.email.clone(), self.form.password.clone());
                self.spawn_sign_in(AuthKind::Login, async move {
                    provider.authenticate(&credentials).await
                });
            }
            AuthMode::SignUp => {
                let registration = Registration {
                    email: self.form.email.clone(),
                    password: self.form.password.clone(),
                    name: self.form.name.clone(),
                };
                self.spawn_sign_in(AuthKind::Register, async move {
                    provider.register(&registration).await
                });
            }
        }
    }

    pub fn start_federated_login(&mut self) {
        if self.store.is_loading() {
            return;
        }
        self.form.error = None;
        let provider = Arc::clone(&self.provider);
        self.spawn_sign_in(AuthKind::Federated, async move {
            provider.federated_authenticate().await
        });
    }

    pub fn start_logout(&mut self) {
        if !self.store.is_authenticated() || self.store.pending() == Some(AuthKind::Logout) {
            return;
        }
        let Some(ticket) = self.issue_ticket(AuthKind::Logout) else {
            return;
        };
        let provider = Arc::clone(&self.provider);
        let tx = self.auth_tx.clone();
        tokio::spawn(async move {
            let result = run_request(async move { provider.sign_out().await }).await;
            Self::send_result(&tx, AuthResult::SignedOut { ticket, result }).await;
        });
        self.status_message = Some("Signing out...".to_string());
    }

    fn issue_ticket(&mut self, kind: AuthKind) -> Option<Ticket> {
        match self.store.dispatch(Action::AuthStarted(kind)) {
            Outcome::Issued(ticket) => Some(ticket),
            other => {
                error!(?other, "Auth request was not issued a ticket");
                None
            }
        }
    }

    fn spawn_sign_in<F>(&mut self, kind: AuthKind, request: F)
    where
        F: std::future::Future<Output = Result<Session, AuthError>> + Send + 'static,
    {
        let Some(ticket) = self.issue_ticket(kind) else {
            return;
        };
        info!(ticket, kind = kind.name(), "Starting auth request");
        let tx = self.auth_tx.clone();
        tokio::spawn(async move {
            let result = run_request(request).await;
            Self::send_result(&tx, AuthResult::SignedIn { ticket, kind, result }).await;
        });
    }

    /// Helper to send auth results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<AuthResult>, result: AuthResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send auth result - channel closed");
        }
    }

    /// Check for completed background tasks and process results
    pub async fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.auth_rx.try_recv() {
            results.push(result);
        }
        for result in results {
            self.process_auth_result(result);
        }
    }

    /// Wait for the next auth result and apply it
    #[cfg(test)]
    async fn next_background_result(&mut self) {
        if let Some(result) = self.auth_rx.recv().await {
            self.process_auth_result(result);
        }
    }

    fn process_auth_result(&mut self, result: AuthResult) {
        match result {
            AuthResult::SignedIn {
                ticket,
                kind,
                result,
            } => {
                let succeeded = result.is_ok();
                let action = match result {
                    Ok(session) => Action::AuthSucceeded { ticket, session },
                    Err(error) => {
                        if !error.is_validation() {
                            error!(error = %error, kind = kind.name(), "Identity provider failure");
                        }
                        Action::AuthFailed { ticket, error }
                    }
                };
                if self.store.dispatch(action) != Outcome::Applied {
                    return;
                }
                if succeeded {
                    self.form.clear_secrets();
                    self.form.error = None;
                    self.onboarding_selection = 0;
                    self.clear_content();
                    self.status_message = Some(kind.success_message().to_string());
                } else {
                    self.form.error = self.store.auth_error().map(ToString::to_string);
                }
            }
            AuthResult::SignedOut { ticket, result } => {
                let action = match result {
                    Ok(()) => Action::LoggedOut { ticket },
                    Err(error) => Action::AuthFailed { ticket, error },
                };
                if self.store.dispatch(action) != Outcome::Applied {
                    return;
                }
                if self.store.is_authenticated() {
                    self.status_message = self.store.auth_error().map(ToString::to_string);
                } else {
                    self.clear_content();
                    self.form = AuthForm::new(self.config.email.clone());
                    self.state = AppState::Normal;
                    self.status_message = Some(AuthKind::Logout.success_message().to_string());
                }
            }
        }
    }

    // =========================================================================
    // Onboarding
    // =========================================================================

    /// Number of choices on the current onboarding step
    pub fn onboarding_choices(&self) -> usize {
        match self.store.onboarding().map(|f| f.step()) {
            Some(OnboardingStep::RoleSelect) => Role::ALL.len(),
            Some(OnboardingStep::SkillSelect) => Skill::ALL.len(),
            _ => 0,
        }
    }

    pub fn onboarding_move(&mut self, forward: bool) {
        let choices = self.onboarding_choices();
        if choices == 0 {
            return;
        }
        self.onboarding_selection = if forward {
            (self.onboarding_selection + 1) % choices
        } else {
            (self.onboarding_selection + choices - 1) % choices
        };
    }

    /// Enter on the wizard: pick the highlighted choice or finish
    pub fn onboarding_confirm(&mut self) {
        let Some(step) = self.store.onboarding().map(|f| f.step()) else {
            return;
        };
        let event = match step {
            OnboardingStep::RoleSelect => Role::ALL
                .get(self.onboarding_selection)
                .map(|r| OnboardingEvent::SelectRole(*r)),
            OnboardingStep::SkillSelect => Skill::ALL
                .get(self.onboarding_selection)
                .map(|s| OnboardingEvent::SelectSkill(*s)),
            OnboardingStep::NameEntry => Some(OnboardingEvent::Submit),
            OnboardingStep::Complete => None,
        };
        if let Some(event) = event {
            self.apply_onboarding(event);
        }
    }

    pub fn onboarding_back(&mut self) {
        self.apply_onboarding(OnboardingEvent::Back);
    }

    pub fn onboarding_push_char(&mut self, c: char) {
        let Some(flow) = self.store.onboarding() else {
            return;
        };
        if !can_add_char(flow.name().chars().count(), MAX_NAME_LENGTH, c) {
            return;
        }
        let mut name = flow.name().to_string();
        name.push(c);
        self.apply_onboarding(OnboardingEvent::EditName(name));
    }

    pub fn onboarding_pop_char(&mut self) {
        let Some(flow) = self.store.onboarding() else {
            return;
        };
        let mut name = flow.name().to_string();
        if name.pop().is_some() {
            self.apply_onboarding(OnboardingEvent::EditName(name));
        }
    }

    fn apply_onboarding(&mut self, event: OnboardingEvent) {
        match self.store.dispatch(Action::Onboarding(event)) {
            Outcome::Applied => {}
            Outcome::Rejected(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
            _ => return,
        }
        self.status_message = None;

        if self.store.is_onboarded() {
            self.load_content();
            return;
        }

        // Highlight whatever was chosen last time on this step
        self.onboarding_selection = match self.store.onboarding() {
            Some(flow) => match flow.step() {
                OnboardingStep::RoleSelect => flow
                    .role()
                    .and_then(|r| Role::ALL.iter().position(|x| *x == r))
                    .unwrap_or(0),
                OnboardingStep::SkillSelect => flow
                    .skill()
                    .and_then(|s| Skill::ALL.iter().position(|x| *x == s))
                    .unwrap_or(0),
                _ => 0,
            },
            None => 0,
        };
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Build the canned content for the current profile
    fn load_content(&mut self) {
        let Some(profile) = self.store.profile() else {
            return;
        };
        let (role, skill) = (profile.role, profile.primary_skill);
        self.quests = catalog::roadmap(skill);
        self.people = catalog::directory(role, skill);
        self.posts = catalog::posts(skill);
        self.quest_selection = 0;
        self.people_selection = 0;
        self.forum_selection = 0;
        info!(role = %role, skill = %skill, "Content loaded");
    }

    fn clear_content(&mut self) {
        self.quests.clear();
        self.people.clear();
        self.posts.clear();
        self.search_query.clear();
        self.forum_category = None;
        self.quest_selection = 0;
        self.people_selection = 0;
        self.forum_selection = 0;
    }

    pub fn roadmap_summary(&self) -> RoadmapSummary {
        RoadmapSummary::of(&self.quests)
    }

    pub fn progress_report(&self) -> Option<ProgressReport> {
        self.store
            .profile()
            .map(|p| catalog::report(p, self.roadmap_summary()))
    }

    pub fn visible_people(&self) -> Vec<&Person> {
        search(&self.people, &self.search_query)
    }

    pub fn visible_posts(&self) -> Vec<&ForumPost> {
        filter_posts(&self.posts, &self.search_query, self.forum_category)
    }

    pub fn selected_quest(&self) -> Option<&Quest> {
        self.quests.get(self.quest_selection)
    }

    // =========================================================================
    // Screen actions
    // =========================================================================

    pub fn select_screen(&mut self, screen: Screen) {
        if self.store.screen() != screen {
            self.search_query.clear();
        }
        self.store.dispatch(Action::SelectScreen(screen));
    }

    /// Length of the list on the current screen
    fn current_list_len(&self) -> usize {
        match self.store.screen() {
            Screen::Dashboard => self.quests.len(),
            Screen::Mentors => self.visible_people().len(),
            Screen::Forum => self.visible_posts().len(),
            Screen::Progress | Screen::Profile => 0,
        }
    }

    fn current_selection_mut(&mut self) -> Option<&mut usize> {
        match self.store.screen() {
            Screen::Dashboard => Some(&mut self.quest_selection),
            Screen::Mentors => Some(&mut self.people_selection),
            Screen::Forum => Some(&mut self.forum_selection),
            Screen::Progress | Screen::Profile => None,
        }
    }

    pub fn move_selection(&mut self, forward: bool) {
        let len = self.current_list_len();
        if let Some(selection) = self.current_selection_mut() {
            if forward {
                if *selection + 1 < len {
                    *selection += 1;
                }
            } else {
                *selection = selection.saturating_sub(1);
            }
        }
    }

    /// Reset the list selection after the search or filter changed
    pub fn reset_selection(&mut self) {
        if let Some(selection) = self.current_selection_mut() {
            *selection = 0;
        }
    }

    pub fn cycle_forum_category(&mut self) {
        self.forum_category = ForumCategory::cycle(self.forum_category);
        self.forum_selection = 0;
    }

    /// Only learners submit work; mentors review it
    pub fn can_complete_quests(&self) -> bool {
        self.role() == Role::Learner
    }

    /// Mark the highlighted quest complete and bank its experience
    pub fn complete_selected_quest(&mut self) {
        if !self.can_complete_quests() {
            self.status_message =
                Some("Mentors review quests, only learners complete them".to_string());
            return;
        }
        let index = self.quest_selection;
        let Some(title) = self.quests.get(index).map(|q| q.title.clone()) else {
            return;
        };
        match complete_quest(&mut self.quests, index) {
            Some(earned) => {
                self.store.dispatch(Action::GrantExperience(earned));
                info!(quest = %title, earned, "Quest completed");
                self.status_message = Some(format!("Quest complete! +{} XP", earned));
            }
            None => {
                self.status_message = Some(format!("\"{}\" can't be completed yet", title));
            }
        }
    }

    pub fn switch_role(&mut self) {
        let Some(role) = self.store.profile().map(|p| p.role.other()) else {
            return;
        };
        self.store.dispatch(Action::SwitchRole(role));
        if let Some(skill) = self.store.profile().map(|p| p.primary_skill) {
            self.people = catalog::directory(role, skill);
            self.people_selection = 0;
        }
        self.status_message = Some(format!("Switched to {} mode", role));
    }

    pub fn reset_progress(&mut self) {
        if self.store.dispatch(Action::ResetProgress) != Outcome::Applied {
            return;
        }
        if let Some(skill) = self.store.profile().map(|p| p.primary_skill) {
            self.quests = catalog::roadmap(skill);
            self.quest_selection = 0;
        }
        self.status_message = Some("Progress reset".to_string());
    }
}

/// Run a provider call on its own task. A panic becomes a provider error.
async fn run_request<T, F>(request: F) -> Result<T, AuthError>
where
    T: Send + 'static,
    F: std::future::Future<Output = Result<T, AuthError>> + Send + 'static,
{
    match tokio::spawn(request).await {
        Ok(result) => result,
        Err(e) => Err(AuthError::provider(&e.to_string())),
    }
}

// ============================================================================
// Input validation helpers
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if a character may be added to a field already `current_len` long
pub fn can_add_char(current_len: usize, max_len: usize, c: char) -> bool {
    current_len < max_len && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use learnex_core::config::Latency;
    use learnex_core::models::QuestStatus;

    use super::*;

    fn test_app() -> App {
        let config = Config::default();
        let provider = Arc::new(MockIdentityProvider::new(Latency::none()));
        App::with_provider(config, provider)
    }

    async fn signed_in_app() -> App {
        let mut app = test_app();
        app.form.email = "alex@example.com".to_string();
        app.form.password = "x".to_string();
        app.submit_auth_form();
        app.next_background_result().await;
        app
    }

    async fn onboarded_app() -> App {
        let mut app = signed_in_app().await;
        app.onboarding_confirm(); // Learner
        app.onboarding_confirm(); // Coding
        app.onboarding_confirm(); // Name prefilled from session
        app
    }

    // -------------------------------------------------------------------------
    // Auth form
    // -------------------------------------------------------------------------

    #[test]
    fn test_auth_form_focus_cycles() {
        let mut form = AuthForm::new(None);
        assert_eq!(form.focus, AuthField::Email);
        form.next_field();
        assert_eq!(form.focus, AuthField::Password);
        form.next_field();
        assert_eq!(form.focus, AuthField::Submit);
        form.next_field();
        assert_eq!(form.focus, AuthField::Email);
        form.prev_field();
        assert_eq!(form.focus, AuthField::Submit);
    }

    #[test]
    fn test_prefilled_email_focuses_password() {
        let form = AuthForm::new(Some("alex@example.com".to_string()));
        assert_eq!(form.focus, AuthField::Password);
    }

    #[test]
    fn test_toggle_mode_clears_passwords() {
        let mut form = AuthForm::new(None);
        form.password = "secret".to_string();
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.focus, AuthField::Name);
        assert!(form.password.is_empty());
        assert!(form.strength().is_none());
    }

    #[test]
    fn test_strength_only_when_signing_up() {
        let mut form = AuthForm::new(None);
        form.password = "Abcdef1!".to_string();
        assert!(form.strength().is_none());
        form.mode = AuthMode::SignUp;
        assert_eq!(form.strength().map(|s| s.score()), Some(100));
    }

    #[test]
    fn test_push_char_respects_focus_and_limits() {
        let mut form = AuthForm::new(None);
        assert!(form.push_char('a'));
        assert!(!form.push_char('\n'));
        form.focus = AuthField::Submit;
        assert!(!form.push_char('b'));
        assert_eq!(form.email, "a");
        form.focus = AuthField::Email;
        form.pop_char();
        assert!(form.email.is_empty());
    }

    #[test]
    fn test_can_add_char() {
        assert!(can_add_char(0, 10, 'a'));
        assert!(can_add_char(9, 10, '!'));
        assert!(!can_add_char(10, 10, 'a'));
        assert!(!can_add_char(0, 10, '\x00'));
        assert!(!can_add_char(0, 10, '\t'));
    }

    // -------------------------------------------------------------------------
    // Auth flow
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_empty_form_is_rejected_locally() {
        let mut app = test_app();
        app.submit_auth_form();
        assert_eq!(app.form.error.as_deref(), Some("Please fill in all fields"));
        assert!(!app.store.is_loading());
    }

    #[tokio::test]
    async fn test_login_reaches_onboarding() {
        let app = signed_in_app().await;
        assert_eq!(app.view(), View::Onboarding);
        assert_eq!(app.status_message.as_deref(), Some("Login successful!"));
        assert!(app.form.password.is_empty());
    }

    #[tokio::test]
    async fn test_bad_email_shows_provider_error() {
        let mut app = test_app();
        app.form.email = "not-an-email".to_string();
        app.form.password = "x".to_string();
        app.submit_auth_form();
        app.next_background_result().await;
        assert_eq!(app.view(), View::Credentials);
        let error = app.form.error.unwrap();
        assert!(error.contains("valid email"));
    }

    #[tokio::test]
    async fn test_signup_checks_run_before_provider() {
        let mut app = test_app();
        app.form.toggle_mode();
        app.form.name = "Sam".to_string();
        app.form.email = "sam@example.com".to_string();
        app.form.password = "Abcdef1!".to_string();
        app.form.confirm = "Abcdef1?".to_string();
        app.submit_auth_form();
        assert_eq!(app.form.error.as_deref(), Some("Passwords do not match"));
        assert!(!app.store.is_loading());
    }

    #[tokio::test]
    async fn test_signup_uses_supplied_name() {
        let mut app = test_app();
        app.form.toggle_mode();
        app.form.name = "Sam Smith".to_string();
        app.form.email = "sam@example.com".to_string();
        app.form.password = "Abcdef1!".to_string();
        app.form.confirm = "Abcdef1!".to_string();
        app.submit_auth_form();
        app.next_background_result().await;
        assert_eq!(app.store.session().unwrap().name, "Sam Smith");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Account created successfully!")
        );
    }

    async fn crashing_login() -> Result<Session, AuthError> {
        panic!("provider crashed")
    }

    #[tokio::test]
    async fn test_crashed_request_reports_provider_error() {
        let mut app = test_app();
        app.spawn_sign_in(AuthKind::Login, crashing_login());
        assert!(app.store.is_loading());
        app.next_background_result().await;
        assert!(!app.store.is_loading());
        assert!(!app.store.is_authenticated());
        let error = app.store.auth_error().unwrap();
        assert!(!error.is_validation());
        assert!(app
            .form
            .error
            .as_deref()
            .unwrap()
            .starts_with("Identity provider error"));
    }

    #[tokio::test]
    async fn test_federated_login() {
        let mut app = test_app();
        app.start_federated_login();
        app.next_background_result().await;
        assert_eq!(app.store.session().unwrap().email, "user@gmail.com");
        assert_eq!(app.store.onboarding().unwrap().name(), "Google User");
    }

    #[tokio::test]
    async fn test_logout_clears_profile_and_content() {
        let mut app = onboarded_app().await;
        assert!(!app.quests.is_empty());
        app.start_logout();
        app.next_background_result().await;
        assert_eq!(app.view(), View::Credentials);
        assert!(app.store.profile().is_none());
        assert!(app.quests.is_empty());
    }

    // -------------------------------------------------------------------------
    // Onboarding
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_onboarding_mentor_music_sam() {
        let mut app = signed_in_app().await;
        app.onboarding_move(true); // Mentor
        app.onboarding_confirm();
        app.onboarding_move(true); // Music
        app.onboarding_confirm();
        for _ in 0.."Alex".len() {
            app.onboarding_pop_char();
        }
        for c in "Sam".chars() {
            app.onboarding_push_char(c);
        }
        app.onboarding_confirm();

        let profile = app.store.profile().unwrap();
        assert_eq!(profile.role, Role::Mentor);
        assert_eq!(profile.primary_skill, Skill::Music);
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.level(), 1);
        assert_eq!(profile.experience(), 0);
        assert_eq!(app.view(), View::Screen(Screen::Dashboard));
    }

    #[tokio::test]
    async fn test_onboarding_back_restores_selection() {
        let mut app = signed_in_app().await;
        app.onboarding_move(true);
        app.onboarding_confirm();
        app.onboarding_back();
        assert_eq!(app.onboarding_selection, 1);
    }

    #[tokio::test]
    async fn test_onboarding_blank_name_stays_put() {
        let mut app = signed_in_app().await;
        app.onboarding_confirm();
        app.onboarding_confirm();
        for _ in 0..10 {
            app.onboarding_pop_char();
        }
        app.onboarding_confirm();
        assert_eq!(app.view(), View::Onboarding);
        assert!(app.status_message.is_some());
    }

    // -------------------------------------------------------------------------
    // Screens
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_complete_quest_grants_experience() {
        let mut app = onboarded_app().await;
        let index = app
            .quests
            .iter()
            .position(|q| q.status == QuestStatus::InProgress)
            .unwrap();
        let xp = app.quests[index].xp;
        app.quest_selection = index;
        app.complete_selected_quest();
        assert_eq!(app.store.profile().unwrap().experience(), xp);
        assert!(!app.quests.iter().any(|q| q.status == QuestStatus::Locked));
    }

    #[tokio::test]
    async fn test_completed_quest_cannot_be_completed_again() {
        let mut app = onboarded_app().await;
        app.quest_selection = 0;
        app.complete_selected_quest();
        assert_eq!(app.store.profile().unwrap().experience(), 0);
    }

    #[tokio::test]
    async fn test_mentor_cannot_complete_quests() {
        let mut app = onboarded_app().await;
        app.switch_role();
        assert!(!app.can_complete_quests());
        let index = app
            .quests
            .iter()
            .position(|q| q.status == QuestStatus::InProgress)
            .unwrap();
        app.quest_selection = index;
        app.complete_selected_quest();
        assert_eq!(app.store.profile().unwrap().experience(), 0);
        assert_eq!(app.quests[index].status, QuestStatus::InProgress);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_switch_role_swaps_directory() {
        let mut app = onboarded_app().await;
        let before: Vec<String> = app.people.iter().map(|p| p.name.clone()).collect();
        app.switch_role();
        assert_eq!(app.role(), Role::Mentor);
        let after: Vec<String> = app.people.iter().map(|p| p.name.clone()).collect();
        assert_ne!(before, after);
    }

    #[tokio::test]
    async fn test_selection_is_clamped() {
        let mut app = onboarded_app().await;
        for _ in 0..20 {
            app.move_selection(true);
        }
        assert_eq!(app.quest_selection, app.quests.len() - 1);
        for _ in 0..20 {
            app.move_selection(false);
        }
        assert_eq!(app.quest_selection, 0);
    }

    #[tokio::test]
    async fn test_screen_change_clears_search() {
        let mut app = onboarded_app().await;
        app.select_screen(Screen::Mentors);
        app.search_query = "zzz".to_string();
        assert!(app.visible_people().is_empty());
        app.select_screen(Screen::Forum);
        assert!(app.search_query.is_empty());
    }

    #[tokio::test]
    async fn test_forum_category_filter() {
        let mut app = onboarded_app().await;
        let all = app.visible_posts().len();
        app.cycle_forum_category();
        assert_eq!(app.forum_category, Some(ForumCategory::Questions));
        assert!(app.visible_posts().len() < all);
        assert!(app
            .visible_posts()
            .iter()
            .all(|p| p.category == ForumCategory::Questions));
    }
}
