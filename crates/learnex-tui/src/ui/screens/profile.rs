use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use learnex_core::utils::format_age;

use crate::app::App;
use crate::ui::render::progress_bar;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (Some(profile), Some(session)) = (app.store.profile(), app.store.session()) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let skill = profile.primary_skill;
    let about = vec![
        Line::from(vec![
            Span::styled(format!(" [{}] ", profile.initials()), styles::title_style()),
            Span::styled(profile.name.clone(), styles::list_item_style()),
        ]),
        Line::from(""),
        field("Email", Span::raw(profile.email.clone())),
        field(
            "Role",
            Span::styled(profile.role.to_string(), styles::role_style(profile.role)),
        ),
        field(
            "Skill",
            Span::styled(
                format!("{} {}", styles::skill_glyph(skill), skill.display_name()),
                Style::default().fg(styles::skill_color(skill)),
            ),
        ),
        field("Level", Span::raw(profile.level().to_string())),
        field("Experience", Span::raw(format!("{} XP", profile.experience()))),
        Line::from(vec![
            Span::raw(" ".repeat(14)),
            Span::styled(
                progress_bar(profile.level_progress() as u16, 20),
                styles::highlight_style(),
            ),
        ]),
        Line::from(""),
        field("Signed in", Span::raw(format!(
            "via {}, {}",
            session.provider,
            format_age(session.created_at, Utc::now())
        ))),
    ];

    let block = Block::default()
        .title(" Profile ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(about).block(block), chunks[0]);

    let other = profile.role.other();
    let settings = vec![
        action_line("r", &format!("Switch to {} mode", other)),
        Line::from(Span::styled(
            format!("      {}", other.tagline()),
            styles::muted_style(),
        )),
        Line::from(""),
        action_line("x", "Reset progress"),
        Line::from(Span::styled(
            "      Experience back to 0, roadmap restarted",
            styles::muted_style(),
        )),
        Line::from(""),
        action_line("l", "Log out"),
    ];

    let block = Block::default()
        .title(" Settings ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(settings).block(block), chunks[1]);
}

fn field(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![Span::styled(format!(" {:<13}", label), styles::muted_style()), value])
}

fn action_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  [{}] ", key), styles::help_key_style()),
        Span::styled(desc.to_string(), styles::help_desc_style()),
    ])
}
