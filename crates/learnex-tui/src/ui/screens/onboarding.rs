use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use learnex_core::models::{Role, Skill};
use learnex_core::onboarding::{OnboardingFlow, OnboardingStep};

use crate::app::App;
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

const STEPS: usize = 3;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(flow) = app.store.onboarding() else {
        return;
    };

    let area = centered_rect_fixed(64, 24, area);
    frame.render_widget(Clear, area);

    let step = flow.step();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("  Step {} of {}  ", step.number(), STEPS), styles::muted_style()),
            Span::styled(step_dots(step.number()), styles::title_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", flow.prompt()), styles::title_style())),
        Line::from(""),
    ];

    match step {
        OnboardingStep::RoleSelect => {
            for (i, role) in Role::ALL.iter().enumerate() {
                role_lines(&mut lines, *role, i == app.onboarding_selection);
            }
        }
        OnboardingStep::SkillSelect => {
            for (i, skill) in Skill::ALL.iter().enumerate() {
                skill_lines(&mut lines, *skill, i == app.onboarding_selection);
            }
        }
        OnboardingStep::NameEntry | OnboardingStep::Complete => name_lines(&mut lines, flow),
    }

    lines.push(Line::from(""));
    let hint = match step {
        OnboardingStep::RoleSelect => "  ↑/↓ choose · Enter continue · Esc quit",
        OnboardingStep::SkillSelect => "  ↑/↓ choose · Enter continue · Esc back",
        _ => "  Type your name · Enter finish · Esc back",
    };
    lines.push(Line::from(Span::styled(hint, styles::muted_style())));

    if let Some(ref msg) = app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", msg), styles::highlight_style())));
    }

    let block = Block::default()
        .title(" Welcome to Learnex ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn step_dots(current: usize) -> String {
    (1..=STEPS)
        .map(|i| if i <= current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn marker(selected: bool) -> (&'static str, Style) {
    if selected {
        ("▶ ", styles::selected_style())
    } else {
        ("  ", styles::list_item_style())
    }
}

fn role_lines(lines: &mut Vec<Line<'static>>, role: Role, selected: bool) {
    let (mark, style) = marker(selected);
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{}{}", mark, role.headline()), style),
    ]));
    lines.push(Line::from(Span::styled(
        format!("      {}", role.tagline()),
        styles::muted_style(),
    )));
    lines.push(Line::from(""));
}

fn skill_lines(lines: &mut Vec<Line<'static>>, skill: Skill, selected: bool) {
    let (mark, style) = marker(selected);
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(mark, style),
        Span::styled(
            format!("{:<4}", styles::skill_glyph(skill)),
            Style::default().fg(styles::skill_color(skill)),
        ),
        Span::styled(skill.display_name(), style),
        Span::styled(format!("  {}", skill.description()), styles::muted_style()),
    ]));
}

fn name_lines(lines: &mut Vec<Line<'static>>, flow: &OnboardingFlow) {
    lines.push(Line::from(Span::styled(
        "  What should we call you?",
        styles::list_item_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("    Name: [", styles::muted_style()),
        Span::styled(format!("{:<30}▌", flow.name()), styles::selected_style()),
        Span::styled("]", styles::muted_style()),
    ]));
    lines.push(Line::from(""));

    if let (Some(role), Some(skill)) = (flow.role(), flow.skill()) {
        lines.push(Line::from(vec![
            Span::styled("  Joining as ", styles::muted_style()),
            Span::styled(role.to_string(), styles::role_style(role)),
            Span::styled(" · ", styles::muted_style()),
            Span::styled(
                skill.display_name(),
                Style::default().fg(styles::skill_color(skill)),
            ),
        ]));
    }
    if !flow.can_submit() {
        lines.push(Line::from(Span::styled(
            "  A name is required to finish",
            styles::error_style(),
        )));
    }
}
