//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use suitehub_app::state::NoticeLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - cursor row of the focused list
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row of a list without focus
pub fn unfocused_selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn family(index: usize) -> Style {
    Style::default().fg(palette::FAMILY_COLORS[index % palette::FAMILY_COLORS.len()])
}

// --- Status styles ---
pub fn run_badge(ok: bool) -> Style {
    let color = if ok {
        palette::STATUS_GREEN
    } else {
        palette::STATUS_RED
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn notice(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Info => Style::default().fg(palette::STATUS_GREEN),
        NoticeLevel::Warning => Style::default().fg(palette::STATUS_YELLOW),
        NoticeLevel::Error => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn busy() -> Style {
    Style::default().fg(palette::STATUS_BLUE)
}

pub fn input(active: bool) -> Style {
    let bg = if active {
        palette::INPUT_ACTIVE_BG
    } else {
        palette::INPUT_INACTIVE_BG
    };
    Style::default().fg(palette::TEXT_PRIMARY).bg(bg)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Glass block with a title, highlighted when focused
pub fn titled_block(title: &str, focused: bool) -> Block<'_> {
    let title_style = if focused { accent_bold() } else { text_secondary() };
    glass_block(focused).title(ratatui::text::Span::styled(format!(" {title} "), title_style))
}
