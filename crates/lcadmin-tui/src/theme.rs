//! Mosswire palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const MOSS_GREEN: Color = Color::Rgb(118, 208, 132); // #76d084
pub const SEA_TEAL: Color = Color::Rgb(92, 214, 205); // #5cd6cd
pub const LICHEN_YELLOW: Color = Color::Rgb(222, 226, 137); // #dee289
pub const CLAY_ORANGE: Color = Color::Rgb(235, 158, 100); // #eb9e64
pub const ERROR_RED: Color = Color::Rgb(240, 101, 101); // #f06565

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(197, 203, 198); // #c5cbc6
pub const BORDER_GRAY: Color = Color::Rgb(96, 112, 104); // #607068
pub const BG_HIGHLIGHT: Color = Color::Rgb(38, 46, 41); // #262e29
pub const BG_DARK: Color = Color::Rgb(24, 30, 26); // #181e1a

/// Bar colors for the dashboard chart, one per entity.
pub const CHART_SERIES: &[Color] = &[
    MOSS_GREEN,
    SEA_TEAL,
    LICHEN_YELLOW,
    CLAY_ORANGE,
    DIM_WHITE,
];

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(SEA_TEAL).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(MOSS_GREEN)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(SEA_TEAL)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(MOSS_GREEN)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(MOSS_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Dim key-hint text.
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Highlighted key in a key hint.
pub fn key_hint_key() -> Style {
    Style::default()
        .fg(LICHEN_YELLOW)
        .add_modifier(Modifier::BOLD)
}

/// Inline error banner / modal alert text.
pub fn error_text() -> Style {
    Style::default().fg(ERROR_RED)
}
