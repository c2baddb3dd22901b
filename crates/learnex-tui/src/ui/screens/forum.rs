use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use learnex_core::models::{ForumCategory, ForumPost};
use learnex_core::utils::truncate;

use crate::app::{App, AppState};
use crate::ui::styles;

use super::mentors::render_search_bar;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(6),
        ])
        .split(area);

    render_search_bar(frame, app, chunks[0]);
    render_categories(frame, app.forum_category, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let posts = app.visible_posts();
    render_post_list(frame, app, &posts, body[0]);
    render_post(frame, posts.get(app.forum_selection).copied(), body[1]);
}

fn render_categories(frame: &mut Frame, current: Option<ForumCategory>, area: Rect) {
    let mut spans = vec![Span::styled(" [f] ", styles::help_key_style())];
    let all = std::iter::once((None, "All".to_string()))
        .chain(ForumCategory::ALL.iter().map(|c| (Some(*c), c.title())));
    for (i, (category, title)) in all.enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let style = if category == current {
            styles::tab_style(true)
        } else {
            styles::muted_style()
        };
        spans.push(Span::styled(title, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_post_list(frame: &mut Frame, app: &App, posts: &[&ForumPost], area: Rect) {
    let items: Vec<ListItem> = posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let style = if i == app.forum_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            let hot = if post.is_hot {
                Span::styled("🔥", styles::error_style())
            } else {
                Span::raw("  ")
            };
            let line = Line::from(vec![
                Span::raw(" "),
                hot,
                Span::styled(format!(" {:<32}", truncate(&post.title, 32)), style),
                Span::styled(format!(" {} replies", post.replies), styles::muted_style()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Community ({}) ", posts.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(app.state != AppState::Searching));

    let mut state = ListState::default();
    if !posts.is_empty() {
        state.select(Some(app.forum_selection));
    }
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn render_post(frame: &mut Frame, post: Option<&ForumPost>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let Some(post) = post else {
        let empty = Paragraph::new(Span::styled(" No posts match", styles::muted_style()));
        frame.render_widget(empty.block(block), area);
        return;
    };

    let level = post
        .author
        .level
        .map(|l| format!(" · Lv {}", l))
        .unwrap_or_default();
    let lines = vec![
        Line::from(vec![
            Span::styled(post.author.name.clone(), styles::list_item_style()),
            Span::raw(" "),
            Span::styled(post.author.role.to_string(), styles::role_style(post.author.role)),
            Span::styled(format!("{} · {}", level, post.time_ago), styles::muted_style()),
        ]),
        Line::from(Span::styled(post.category.title(), styles::highlight_style())),
        Line::from(""),
        Line::from(post.content.clone()),
        Line::from(""),
        Line::from(Span::styled(
            post.tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" "),
            styles::search_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "♥ {}   💬 {}   👁 {}",
                post.likes, post.replies, post.views
            ),
            styles::muted_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            block
                .title(format!(" {} ", post.title))
                .title_style(styles::title_style()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
