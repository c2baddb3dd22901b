use learnex_core::models::{Difficulty, QuestStatus, Rarity, Role, Skill};
use ratatui::style::{Color, Modifier, Style};

// Color palette
pub const PRIMARY: Color = Color::Rgb(147, 112, 219);
pub const SECONDARY: Color = Color::Rgb(96, 176, 112);
pub const ACCENT: Color = Color::Rgb(224, 176, 64);
pub const ERROR: Color = Color::Rgb(208, 72, 72);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 44, 72);

// Styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default().bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn tab_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn search_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 30, 44)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

// Domain colours

pub fn skill_color(skill: Skill) -> Color {
    match skill {
        Skill::Coding => Color::Rgb(80, 140, 230),
        Skill::Music => Color::Rgb(200, 100, 200),
        Skill::Art => Color::Rgb(230, 120, 80),
        Skill::Writing => Color::Rgb(90, 190, 170),
        Skill::Photography => Color::Rgb(220, 190, 80),
        Skill::Cooking => Color::Rgb(220, 90, 110),
    }
}

pub fn skill_glyph(skill: Skill) -> &'static str {
    match skill {
        Skill::Coding => "</>",
        Skill::Music => "♪",
        Skill::Art => "✎",
        Skill::Writing => "¶",
        Skill::Photography => "◉",
        Skill::Cooking => "♨",
    }
}

pub fn role_style(role: Role) -> Style {
    match role {
        Role::Learner => Style::default().fg(Color::Rgb(80, 140, 230)),
        Role::Mentor => Style::default().fg(SECONDARY),
    }
}

pub fn quest_status_style(status: QuestStatus) -> Style {
    match status {
        QuestStatus::Completed => success_style(),
        QuestStatus::InProgress => highlight_style(),
        QuestStatus::Available => list_item_style(),
        QuestStatus::Locked => muted_style(),
    }
}

pub fn quest_status_glyph(status: QuestStatus) -> &'static str {
    match status {
        QuestStatus::Completed => "✓",
        QuestStatus::InProgress => "▶",
        QuestStatus::Available => "○",
        QuestStatus::Locked => "🔒",
    }
}

pub fn difficulty_style(difficulty: Difficulty) -> Style {
    match difficulty {
        Difficulty::Beginner => success_style(),
        Difficulty::Intermediate => highlight_style(),
        Difficulty::Advanced => error_style(),
    }
}

pub fn rarity_style(rarity: Rarity) -> Style {
    match rarity {
        Rarity::Common => muted_style(),
        Rarity::Rare => Style::default().fg(Color::Rgb(80, 140, 230)),
        Rarity::Epic => Style::default().fg(PRIMARY),
        Rarity::Legendary => highlight_style().add_modifier(Modifier::BOLD),
    }
}
