//! Color palette and shared styles for the dashboard.
//!
//! # Color Palette
//! - **Accent**: warm tomato (focus, titles, primary series)
//! - **Positive**: basil green (selected items, totals)
//! - **Warning**: mustard (status warnings)
//! - **Muted**: slate gray (hints, axis labels)

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(255, 99, 71);
pub const POSITIVE: Color = Color::Rgb(106, 190, 48);
pub const WARNING: Color = Color::Rgb(230, 180, 34);
pub const MUTED: Color = Color::Rgb(120, 130, 145);
pub const TEXT: Color = Color::White;

/// Series colors for per-category charts, cycled by index.
pub const SERIES: [Color; 5] = [
    ACCENT,
    POSITIVE,
    WARNING,
    Color::Rgb(100, 149, 237),
    Color::Rgb(186, 104, 200),
];

pub fn series(index: usize) -> Color {
    SERIES[index % SERIES.len()]
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Highlight for the row under the cursor.
pub fn cursor() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT)
}

/// Border of the single visible panel.
pub fn panel_border() -> Style {
    accent()
}

pub fn panel_title() -> Style {
    accent_bold()
}
