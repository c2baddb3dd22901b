use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use learnex_core::catalog::quests::TEACHING_NOTES;
use learnex_core::models::{Quest, QuestStatus, Role};
use learnex_core::utils::truncate;

use crate::app::App;
use crate::ui::render::{centered_rect_fixed, progress_bar};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    render_summary(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_quest_list(frame, app, body[0]);
    render_quest_preview(frame, app, body[1]);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let Some(profile) = app.store.profile() else {
        return;
    };
    let skill = profile.primary_skill;
    let summary = app.roadmap_summary();

    let greeting = match profile.role {
        Role::Learner => format!("Welcome back, {}! Ready to learn?", profile.name),
        Role::Mentor => format!("Welcome back, {}! Your students are waiting.", profile.name),
    };

    let lines = vec![
        Line::from(Span::styled(format!(" {}", greeting), styles::title_style())),
        Line::from(vec![
            Span::styled(" Level ", styles::muted_style()),
            Span::styled(profile.level().to_string(), styles::highlight_style()),
            Span::styled("  ", styles::muted_style()),
            Span::styled(
                progress_bar(profile.level_progress() as u16, 20),
                styles::highlight_style(),
            ),
            Span::styled(
                format!(" {}/100 XP to level {}", profile.level_progress(), profile.level() + 1),
                styles::muted_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Roadmap ", styles::muted_style()),
            Span::styled(
                format!("{} {}", styles::skill_glyph(skill), skill.display_name()),
                Style::default().fg(styles::skill_color(skill)),
            ),
            Span::styled(
                format!(
                    "  {}/{} quests · {}%",
                    summary.completed,
                    summary.total,
                    summary.percent()
                ),
                styles::muted_style(),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_quest_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .quests
        .iter()
        .enumerate()
        .map(|(i, quest)| {
            let style = if i == app.quest_selection {
                styles::selected_style()
            } else {
                styles::quest_status_style(quest.status)
            };
            let line = Line::from(vec![
                Span::raw(format!(" {} ", styles::quest_status_glyph(quest.status))),
                Span::raw(format!("{:<28}", truncate(&quest.title, 28))),
                Span::raw(format!("{:>4} XP", quest.xp)),
            ]);
            ListItem::new(line).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Quests ({}) ", app.quests.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.quest_selection));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_quest_preview(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let Some(quest) = app.selected_quest() else {
        let empty = Paragraph::new(Span::styled(" No quests yet", styles::muted_style()));
        frame.render_widget(empty.block(block), area);
        return;
    };

    let mut lines = quest_header(quest);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::raw(quest.description.clone())));
    lines.push(Line::from(""));
    let hint = match quest.status {
        QuestStatus::Completed => "Completed. Nice work!",
        QuestStatus::Locked => "Finish the earlier quests to unlock this one.",
        QuestStatus::Available | QuestStatus::InProgress if app.can_complete_quests() => {
            "Press Enter for details, c to mark complete."
        }
        QuestStatus::Available | QuestStatus::InProgress => "Press Enter for teaching notes.",
    };
    lines.push(Line::from(Span::styled(hint, styles::muted_style())));

    let paragraph = Paragraph::new(lines)
        .block(block.title(format!(" {} ", quest.title)).title_style(styles::title_style()))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn quest_header(quest: &Quest) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(quest.status.to_string(), styles::quest_status_style(quest.status)),
            Span::styled(" · ", styles::muted_style()),
            Span::styled(quest.difficulty.to_string(), styles::difficulty_style(quest.difficulty)),
            Span::styled(" · ", styles::muted_style()),
            Span::styled(quest.estimated_time.clone(), styles::muted_style()),
            Span::styled(" · ", styles::muted_style()),
            Span::styled(format!("{} XP", quest.xp), styles::highlight_style()),
        ]),
    ]
}

/// Full quest detail. Learners get the complete key, mentors get teaching notes.
pub fn render_quest_overlay(frame: &mut Frame, app: &App) {
    let Some(quest) = app.selected_quest() else {
        return;
    };
    let area = centered_rect_fixed(74, 36, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = quest_header(quest);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Overview", styles::highlight_style())));
    lines.push(Line::from(Span::raw(quest.overview.clone())));

    if !quest.learning_objectives.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Learning Objectives",
            styles::highlight_style(),
        )));
        for objective in &quest.learning_objectives {
            lines.push(Line::from(format!("  • {}", objective)));
        }
    }

    if !quest.prerequisites.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Prerequisites", styles::highlight_style())));
        for prerequisite in &quest.prerequisites {
            lines.push(Line::from(format!("  • {}", prerequisite)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Resources", styles::highlight_style())));
    for resource in &quest.resources {
        let duration = resource
            .duration
            .as_deref()
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<9}", resource.kind.to_string()), styles::muted_style()),
            Span::raw(resource.title.clone()),
            Span::styled(duration, styles::muted_style()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Assessment ", styles::highlight_style()),
        Span::styled(format!("({})", quest.assessment.kind), styles::muted_style()),
    ]));
    lines.push(Line::from(Span::raw(quest.assessment.description.clone())));

    let footer = if app.can_complete_quests() {
        " [c] complete · [Esc] close "
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Teaching Notes", styles::highlight_style())));
        for note in TEACHING_NOTES {
            lines.push(Line::from(format!("  • {}", note)));
        }
        " [Esc] close "
    };

    let block = Block::default()
        .title(format!(" {} ", quest.title))
        .title_style(styles::title_style())
        .title_bottom(Line::from(Span::styled(footer, styles::muted_style())))
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
