//! Keyboard input handling for the TUI.
//!
//! Which keys mean what depends first on any open overlay, then on the
//! routed view: the credential form and the name step swallow typing, the
//! main screens treat letters as commands.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use learnex_core::onboarding::OnboardingStep;
use learnex_core::router::{Screen, View};

use crate::app::{App, AppState, AuthField};

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // Handle quest detail overlay
    if matches!(app.state, AppState::ViewingQuest) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.state = AppState::Normal,
            KeyCode::Char('c') if app.can_complete_quests() => {
                app.complete_selected_quest();
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    match app.view() {
        View::Credentials => handle_auth_input(app, key),
        View::Onboarding => handle_onboarding_input(app, key),
        View::Screen(screen) => {
            if matches!(app.state, AppState::Searching) {
                handle_search_input(app, key)
            } else {
                handle_screen_input(app, screen, key)
            }
        }
    }
}

fn handle_auth_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    let form = &mut app.form;
    match key.code {
        KeyCode::Esc => app.state = AppState::ConfirmingQuit,
        KeyCode::Down | KeyCode::Tab => form.next_field(),
        KeyCode::Up | KeyCode::BackTab => form.prev_field(),
        KeyCode::F(2) => form.toggle_mode(),
        KeyCode::F(3) => app.start_federated_login(),
        KeyCode::Enter => {
            if form.focus == AuthField::Submit {
                app.submit_auth_form();
            } else {
                form.next_field();
            }
        }
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) => {
            form.push_char(c);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_onboarding_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    let entering_name = app
        .store
        .onboarding()
        .is_some_and(|f| f.step() == OnboardingStep::NameEntry);

    match key.code {
        KeyCode::Up => app.onboarding_move(false),
        KeyCode::Down => app.onboarding_move(true),
        KeyCode::Enter => app.onboarding_confirm(),
        KeyCode::Esc => {
            let at_start = app
                .store
                .onboarding()
                .is_some_and(|f| f.step() == OnboardingStep::RoleSelect);
            if at_start {
                app.state = AppState::ConfirmingQuit;
            } else {
                app.onboarding_back();
            }
        }
        KeyCode::Backspace if entering_name => app.onboarding_pop_char(),
        KeyCode::Char(c) if entering_name => app.onboarding_push_char(c),
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        _ => {}
    }
    Ok(false)
}

fn handle_screen_input(app: &mut App, screen: Screen, key: KeyEvent) -> Result<bool> {
    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return Ok(false);
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return Ok(false);
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(target) = Screen::from_index(index) {
                app.select_screen(target);
            }
            return Ok(false);
        }
        KeyCode::Left => {
            app.select_screen(screen.prev());
            return Ok(false);
        }
        KeyCode::Right => {
            app.select_screen(screen.next());
            return Ok(false);
        }
        KeyCode::Up => {
            app.move_selection(false);
            return Ok(false);
        }
        KeyCode::Down => {
            app.move_selection(true);
            return Ok(false);
        }
        _ => {}
    }

    // Screen-specific keys
    match (screen, key.code) {
        (Screen::Dashboard, KeyCode::Enter) => {
            if app.selected_quest().is_some() {
                app.state = AppState::ViewingQuest;
            }
        }
        (Screen::Dashboard, KeyCode::Char('c')) => app.complete_selected_quest(),
        (Screen::Mentors | Screen::Forum, KeyCode::Char('/')) => {
            app.state = AppState::Searching;
            app.search_query.clear();
            app.reset_selection();
        }
        (Screen::Mentors | Screen::Forum, KeyCode::Esc) => {
            app.search_query.clear();
            app.reset_selection();
        }
        (Screen::Forum, KeyCode::Char('f')) => app.cycle_forum_category(),
        (Screen::Profile, KeyCode::Char('r')) => app.switch_role(),
        (Screen::Profile, KeyCode::Char('x')) => app.reset_progress(),
        (Screen::Profile, KeyCode::Char('l')) => app.start_logout(),
        _ => {}
    }
    Ok(false)
}

fn handle_search_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
            app.search_query.clear();
            app.reset_selection();
        }
        KeyCode::Enter => {
            // Keep search query active
            app.state = AppState::Normal;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.reset_selection();
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            app.reset_selection();
        }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use learnex_core::auth::{IdentityProvider, MockIdentityProvider, Session};
    use learnex_core::config::Latency;
    use learnex_core::store::{AuthKind, Outcome};
    use learnex_core::{Action, Config};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, key(code)).await.unwrap()
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    fn test_app() -> App {
        let provider: Arc<dyn IdentityProvider> =
            Arc::new(MockIdentityProvider::new(Latency::none()));
        App::with_provider(Config::default(), provider)
    }

    /// Sign in and onboard without going through the provider
    fn onboarded_app() -> App {
        let mut app = test_app();
        let Outcome::Issued(ticket) = app.store.dispatch(Action::AuthStarted(AuthKind::Login))
        else {
            panic!("no ticket issued");
        };
        app.store.dispatch(Action::AuthSucceeded {
            ticket,
            session: Session::email("alex@example.com", "Alex"),
        });
        app.onboarding_confirm();
        app.onboarding_confirm();
        app.onboarding_confirm();
        app
    }

    #[tokio::test]
    async fn test_typing_on_sign_in_form() {
        let mut app = test_app();
        type_text(&mut app, "q?1").await;
        assert_eq!(app.form.email, "q?1");
        assert_eq!(app.state, AppState::Normal);
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "pw").await;
        assert_eq!(app.form.password, "pw");
    }

    #[tokio::test]
    async fn test_f2_switches_to_sign_up() {
        let mut app = test_app();
        press(&mut app, KeyCode::F(2)).await;
        assert_eq!(app.form.focus, AuthField::Name);
    }

    #[tokio::test]
    async fn test_esc_on_sign_in_asks_to_quit() {
        let mut app = test_app();
        assert!(!press(&mut app, KeyCode::Esc).await);
        assert_eq!(app.state, AppState::ConfirmingQuit);
        assert!(press(&mut app, KeyCode::Char('y')).await);
        assert_eq!(app.state, AppState::Quitting);
    }

    #[tokio::test]
    async fn test_number_keys_select_screens() {
        let mut app = onboarded_app();
        press(&mut app, KeyCode::Char('4')).await;
        assert_eq!(app.view(), View::Screen(Screen::Forum));
        press(&mut app, KeyCode::Right).await;
        assert_eq!(app.view(), View::Screen(Screen::Profile));
        press(&mut app, KeyCode::Right).await;
        assert_eq!(app.view(), View::Screen(Screen::Dashboard));
    }

    #[tokio::test]
    async fn test_search_mode_captures_letters() {
        let mut app = onboarded_app();
        press(&mut app, KeyCode::Char('2')).await;
        press(&mut app, KeyCode::Char('/')).await;
        type_text(&mut app, "q").await;
        assert_eq!(app.state, AppState::Searching);
        assert_eq!(app.search_query, "q");
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.search_query, "q");
    }

    #[tokio::test]
    async fn test_quest_overlay_complete() {
        let mut app = onboarded_app();
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::ViewingQuest);
        press(&mut app, KeyCode::Char('c')).await;
        assert_eq!(app.state, AppState::Normal);
        assert!(app.store.profile().unwrap().experience() > 0);
    }

    #[tokio::test]
    async fn test_profile_role_switch_key() {
        let mut app = onboarded_app();
        press(&mut app, KeyCode::Char('5')).await;
        press(&mut app, KeyCode::Char('r')).await;
        assert_eq!(app.role(), learnex_core::models::Role::Mentor);
    }

    #[tokio::test]
    async fn test_mentor_complete_key_keeps_experience() {
        let mut app = onboarded_app();
        press(&mut app, KeyCode::Char('5')).await;
        press(&mut app, KeyCode::Char('r')).await;
        press(&mut app, KeyCode::Char('1')).await;
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Char('c')).await;
        assert_eq!(app.store.profile().unwrap().experience(), 0);
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::ViewingQuest);
        press(&mut app, KeyCode::Char('c')).await;
        assert_eq!(app.state, AppState::ViewingQuest);
        assert_eq!(app.store.profile().unwrap().experience(), 0);
    }

    #[tokio::test]
    async fn test_onboarding_name_typing() {
        let mut app = test_app();
        let Outcome::Issued(ticket) = app.store.dispatch(Action::AuthStarted(AuthKind::Login))
        else {
            panic!("no ticket issued");
        };
        app.store.dispatch(Action::AuthSucceeded {
            ticket,
            session: Session::email("alex@example.com", "Alex"),
        });
        press(&mut app, KeyCode::Enter).await;
        press(&mut app, KeyCode::Enter).await;
        type_text(&mut app, "q").await;
        assert_eq!(app.store.onboarding().unwrap().name(), "Alexq");
        assert_eq!(app.state, AppState::Normal);
    }
}
