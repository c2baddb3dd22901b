use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use learnex_core::router::{Screen, View};

use crate::app::{App, AppState};

use super::screens::{auth, dashboard, forum, mentors, onboarding, profile, progress};
use super::styles;

pub const LOGO: [&str; 3] = [
    "  ╦  ╔═╗╔═╗╦═╗╔╗╔╔═╗═╗ ╦",
    "  ║  ║╣ ╠═╣╠╦╝║║║║╣ ╔╩╦╝",
    "  ╩═╝╚═╝╩ ╩╩╚═╝╚╝╚═╝╩ ╚═",
];

pub fn render(frame: &mut Frame, app: &App) {
    match app.view() {
        View::Credentials => auth::render(frame, app, frame.area()),
        View::Onboarding => onboarding::render(frame, app, frame.area()),
        View::Screen(screen) => render_main(frame, app, screen),
    }

    // Render overlays
    match app.state {
        AppState::ShowingHelp => render_help_overlay(frame),
        AppState::ConfirmingQuit => render_quit_overlay(frame),
        AppState::ViewingQuest => dashboard::render_quest_overlay(frame, app),
        AppState::Normal | AppState::Searching | AppState::Quitting => {}
    }
}

fn render_main(frame: &mut Frame, app: &App, screen: Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(2), // Screens
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_screen_tabs(frame, app, screen, chunks[1]);

    match screen {
        Screen::Dashboard => dashboard::render(frame, app, chunks[2]),
        Screen::Mentors => mentors::render(frame, app, chunks[2]),
        Screen::Progress => progress::render(frame, app, chunks[2]),
        Screen::Forum => forum::render(frame, app, chunks[2]),
        Screen::Profile => profile::render(frame, app, chunks[2]),
    }

    render_status_bar(frame, app, chunks[3]);
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  Learnex";
    let help_hint = "[?] Help";

    let user = match app.store.profile() {
        Some(p) => format!(
            "{} · {} · Lv {} ({} XP)",
            p.name,
            p.role,
            p.level(),
            p.experience()
        ),
        None => String::new(),
    };
    let role_style = app
        .store
        .profile()
        .map(|p| styles::role_style(p.role))
        .unwrap_or_else(styles::muted_style);

    let used = title.chars().count() + user.chars().count() + help_hint.len() + 6;
    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat((area.width as usize).saturating_sub(used))),
        Span::styled(user, role_style),
        Span::raw("   "),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_screen_tabs(frame: &mut Frame, app: &App, current: Screen, area: Rect) {
    let role = app.role();
    let mut spans = vec![Span::raw(" ")];
    for (i, screen) in Screen::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let label = format!("[{}] {}", i + 1, screen.label(role));
        if *screen == current {
            spans.push(Span::styled(label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label, styles::muted_style()));
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.store.screen() {
        Screen::Dashboard if app.can_complete_quests() => "[↵]details [c]omplete | [q]uit",
        Screen::Dashboard => "[↵]details | [q]uit",
        Screen::Mentors => "[/]search | [q]uit",
        Screen::Forum => "[/]search [f]ilter | [q]uit",
        Screen::Profile => "[r]ole [x]reset [l]ogout | [q]uit",
        Screen::Progress => "[q]uit",
    };

    let left_text = match (&app.status_message, app.store.is_loading()) {
        (_, true) => " Please wait... ".to_string(),
        (Some(msg), false) => format!(" {} ", msg),
        (None, false) => String::new(),
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::highlight_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), styles::help_key_style()),
        Span::styled(desc.to_string(), styles::help_desc_style()),
    ])
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 29, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let mut help_text: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(format!("       {}", l), styles::title_style())))
        .collect();
    help_text.extend([
        Line::from(Span::styled(
            format!("              version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        help_line("1-5", "Switch screens"),
        help_line("←/→", "Previous/next screen"),
        help_line("↑/↓", "Navigate list"),
        help_line("Enter", "Open quest details"),
        help_line("Esc", "Close / go back"),
        Line::from(""),
        Line::from(Span::styled(" Actions", styles::highlight_style())),
        help_line("/", "Search mentors or posts"),
        help_line("c", "Complete the selected quest"),
        help_line("f", "Cycle forum category"),
        help_line("r", "Switch learner/mentor role"),
        help_line("x", "Reset progress"),
        help_line("l", "Log out"),
        help_line("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(" Sign In", styles::highlight_style())),
        help_line("Tab", "Next field"),
        help_line("F2", "Switch Sign In / Sign Up"),
        help_line("F3", "Continue with Google"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 10, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(format!("     {}", l), styles::title_style())))
        .collect();
    lines.extend([
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Fixed-width text progress bar, e.g. `████░░░░░░`
pub fn progress_bar(percent: u16, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_fits() {
        let outer = Rect::new(0, 0, 100, 40);
        let r = centered_rect_fixed(40, 10, outer);
        assert_eq!(r, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let outer = Rect::new(0, 0, 20, 5);
        let r = centered_rect_fixed(40, 10, outer);
        assert_eq!(r.width, 20);
        assert_eq!(r.height, 5);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(250, 4), "████");
    }
}
