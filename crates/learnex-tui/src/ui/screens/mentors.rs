use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use learnex_core::models::{Person, PersonDetails, Role};
use learnex_core::router::Screen;
use learnex_core::utils::truncate;

use crate::app::{App, AppState};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    render_search_bar(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let people = app.visible_people();
    render_people_list(frame, app, &people, body[0]);
    render_person_detail(frame, people.get(app.people_selection).copied(), body[1]);
}

/// Search box shared with the forum screen
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.state == AppState::Searching;
    let text = if app.search_query.is_empty() && !searching {
        Span::styled(" Press / to search", styles::muted_style())
    } else {
        let cursor = if searching { "▌" } else { "" };
        Span::styled(format!(" {}{}", app.search_query, cursor), styles::search_style())
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(searching));
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn render_people_list(frame: &mut Frame, app: &App, people: &[&Person], area: Rect) {
    let items: Vec<ListItem> = people
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let dot = if person.is_online {
                Span::styled("● ", styles::success_style())
            } else {
                Span::styled("○ ", styles::muted_style())
            };
            let style = if i == app.people_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            let line = Line::from(vec![
                Span::raw(" "),
                dot,
                Span::styled(format!("{:<20}", truncate(&person.name, 20)), style),
                Span::styled(person.headline(), styles::muted_style()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = Screen::Mentors.label(app.role());
    let noun = match app.role() {
        Role::Learner => "mentors",
        Role::Mentor => "students",
    };
    let block = Block::default()
        .title(format!(" {} ({} {}) ", title, people.len(), noun))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(app.state != AppState::Searching));

    let list = List::new(items).block(block);
    let mut state = ListState::default();
    if !people.is_empty() {
        state.select(Some(app.people_selection));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_person_detail(frame: &mut Frame, person: Option<&Person>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let Some(person) = person else {
        let empty = Paragraph::new(Span::styled(
            " Nobody matches that search",
            styles::muted_style(),
        ));
        frame.render_widget(empty.block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(person.skill.clone(), styles::highlight_style())),
        Line::from(""),
        Line::from(person.bio.clone()),
        Line::from(""),
    ];

    match &person.details {
        PersonDetails::Mentor {
            rating,
            students,
            years_experience,
            response_time,
            hourly_rate,
        } => {
            lines.push(detail_line("Rating", format!("★ {:.1}", rating)));
            lines.push(detail_line("Students", students.to_string()));
            lines.push(detail_line("Experience", format!("{} years", years_experience)));
            lines.push(detail_line("Responds", response_time.clone()));
            lines.push(detail_line("Rate", hourly_rate.clone()));
        }
        PersonDetails::Student {
            level,
            quests_completed,
            learning_goals,
        } => {
            lines.push(detail_line("Level", level.to_string()));
            lines.push(detail_line("Quests", quests_completed.to_string()));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Learning goals", styles::highlight_style())));
            for goal in learning_goals {
                lines.push(Line::from(format!("  • {}", goal)));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Specialties: ", styles::muted_style()),
        Span::raw(person.specialties.join(", ")),
    ]));

    let status = if person.is_online { "online" } else { "offline" };
    let paragraph = Paragraph::new(lines)
        .block(
            block
                .title(format!(" {} ({}) ", person.name, status))
                .title_style(styles::title_style()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), styles::muted_style()),
        Span::raw(value),
    ])
}
