use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use learnex_core::models::{Achievement, LearnerStats, MentorStats, ProgressReport};

use crate::app::App;
use crate::ui::render::progress_bar;
use crate::ui::styles;

/// Width of the weekly bar chart bars
const CHART_WIDTH: usize = 30;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = app.progress_report() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let stats = match &report {
        ProgressReport::Learner(stats) => learner_lines(stats),
        ProgressReport::Mentor(stats) => mentor_lines(stats),
    };
    let title = match report {
        ProgressReport::Learner(_) => " Your Progress ",
        ProgressReport::Mentor(_) => " Your Impact ",
    };
    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(stats).block(block), chunks[0]);

    render_badges(frame, report.badges(), chunks[1]);
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<18}", label), styles::muted_style()),
        Span::styled(value, styles::highlight_style()),
    ])
}

fn learner_lines(stats: &LearnerStats) -> Vec<Line<'static>> {
    let mut lines = vec![
        stat_line("Total XP", stats.total_xp.to_string()),
        stat_line("Level", stats.level.to_string()),
        stat_line(
            "Quests completed",
            format!("{}/{}", stats.quests_completed, stats.total_quests),
        ),
        stat_line("Current streak", format!("{} days", stats.current_streak)),
        stat_line("Hours learned", stats.hours_learned.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            format!(" This week ({} XP)", stats.weekly_total()),
            styles::title_style(),
        )),
    ];

    let max = stats
        .weekly_progress
        .iter()
        .map(|d| d.xp)
        .max()
        .unwrap_or(0)
        .max(1);
    for day in &stats.weekly_progress {
        let percent = (day.xp * 100 / max) as u16;
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<4}", day.day), styles::muted_style()),
            Span::styled(progress_bar(percent, CHART_WIDTH), styles::success_style()),
            Span::styled(format!(" {}", day.xp), styles::muted_style()),
        ]));
    }
    lines
}

fn mentor_lines(stats: &MentorStats) -> Vec<Line<'static>> {
    vec![
        stat_line("Volunteer hours", stats.volunteer_hours.to_string()),
        stat_line("Students helped", stats.students_helped.to_string()),
        stat_line("Responses given", stats.responses_given.to_string()),
        stat_line("Rating", format!("★ {:.1}", stats.rating)),
        Line::from(""),
        Line::from(Span::styled(" Teaching certificate", styles::title_style())),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                progress_bar(stats.certificate_progress, CHART_WIDTH),
                styles::success_style(),
            ),
            Span::styled(
                format!(" {}%", stats.certificate_progress),
                styles::muted_style(),
            ),
        ]),
    ]
}

fn render_badges(frame: &mut Frame, badges: &[Achievement], area: Rect) {
    let mut lines = Vec::new();
    for badge in badges {
        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", badge.icon)),
            Span::styled(badge.name.clone(), styles::list_item_style()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(badge.rarity.to_string(), styles::rarity_style(badge.rarity)),
            Span::styled(format!(" · {}", badge.date), styles::muted_style()),
        ]));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(format!(" Achievements ({}) ", badges.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
