//! Sign in / sign up screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use learnex_core::auth::{PasswordRule, StrengthLabel};
use learnex_core::store::AuthKind;

use crate::app::{App, AuthField, AuthMode};
use crate::ui::render::{centered_rect_fixed, progress_bar, LOGO};
use crate::ui::styles;

/// Visible width of a text field
const FIELD_WIDTH: usize = 26;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let strength = form.strength();

    let mut height = match form.mode {
        AuthMode::SignIn => 16,
        AuthMode::SignUp => 20,
    };
    if strength.is_some() {
        height += 7;
    }
    if form.error.is_some() || app.store.is_loading() {
        height += 2;
    }
    let area = centered_rect_fixed(52, height, area);
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(format!("        {}", l), styles::title_style())))
        .collect();
    lines.push(Line::from(Span::styled(
        "      Learn new skills, or teach what you know",
        styles::muted_style(),
    )));
    lines.push(Line::from(""));

    // Mode switch
    let mut mode_spans = vec![Span::raw("           ")];
    for mode in [AuthMode::SignIn, AuthMode::SignUp] {
        let style = if mode == form.mode {
            styles::tab_style(true)
        } else {
            styles::muted_style()
        };
        mode_spans.push(Span::styled(format!(" {} ", mode.title()), style));
        mode_spans.push(Span::raw("  "));
    }
    mode_spans.push(Span::styled("[F2]", styles::muted_style()));
    lines.push(Line::from(mode_spans));
    lines.push(Line::from(""));

    for field in form.mode.fields() {
        match field {
            AuthField::Name => {
                lines.push(field_line("Full name", &form.name, false, form.focus == *field))
            }
            AuthField::Email => {
                lines.push(field_line("Email", &form.email, false, form.focus == *field))
            }
            AuthField::Password => {
                lines.push(field_line("Password", &form.password, true, form.focus == *field))
            }
            AuthField::Confirm => {
                lines.push(field_line("Confirm", &form.confirm, true, form.focus == *field))
            }
            AuthField::Submit => {
                if let Some(ref strength) = strength {
                    lines.push(Line::from(""));
                    let label_style = match strength.label() {
                        StrengthLabel::Weak => styles::error_style(),
                        StrengthLabel::Medium => styles::highlight_style(),
                        StrengthLabel::Strong => styles::success_style(),
                    };
                    lines.push(Line::from(vec![
                        Span::styled("    Strength  ", styles::muted_style()),
                        Span::styled(progress_bar(strength.score() as u16, 20), label_style),
                        Span::styled(format!(" {}", strength.label()), label_style),
                    ]));
                    for rule in PasswordRule::ALL {
                        let (mark, style) = if strength.passes(rule) {
                            ("✓", styles::success_style())
                        } else {
                            ("·", styles::muted_style())
                        };
                        lines.push(Line::from(Span::styled(
                            format!("      {} {}", mark, rule.label()),
                            style,
                        )));
                    }
                }
                lines.push(Line::from(""));
                lines.push(submit_line(form.mode.title(), form.focus == *field));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("      or ", styles::muted_style()),
        Span::styled("[F3]", styles::help_key_style()),
        Span::styled(" Continue with Google", styles::list_item_style()),
    ]));

    if let Some(kind) = app.store.pending() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("    {}...", pending_message(kind)),
            styles::highlight_style(),
        )));
    } else if let Some(ref error) = form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("    {}", error),
            styles::error_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn pending_message(kind: AuthKind) -> &'static str {
    match kind {
        AuthKind::Login | AuthKind::Federated => "Signing in",
        AuthKind::Register => "Creating account",
        AuthKind::Logout => "Signing out",
    }
}

fn field_line(label: &str, value: &str, masked: bool, focused: bool) -> Line<'static> {
    let shown: String = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    // Keep the tail visible once the value outgrows the box
    let skip = shown.chars().count().saturating_sub(FIELD_WIDTH);
    let shown: String = shown.chars().skip(skip).collect();

    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if focused { "▌" } else { " " };
    Line::from(vec![
        Span::styled(format!("    {:>10}: [", label), styles::muted_style()),
        Span::styled(format!("{:<width$}{}", shown, cursor, width = FIELD_WIDTH), style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn submit_line(title: &str, focused: bool) -> Line<'static> {
    if focused {
        Line::from(vec![
            Span::raw("                 ["),
            Span::styled(format!(" ▶ {} ◀ ", title), styles::selected_style()),
            Span::raw("]"),
        ])
    } else {
        Line::from(vec![
            Span::raw("                 ["),
            Span::styled(format!("   {}   ", title), styles::list_item_style()),
            Span::raw("]"),
        ])
    }
}
