//! Museum theme tokens — aged paper and gilt on a dark background.
//!
//! # Color Palette
//! - **Accent**: aged gold (highlights, focus, headers)
//! - **Positive**: moss green (visited marks, completed quest)
//! - **Negative**: brick red (errors)
//! - **Warning**: amber (incomplete-quest notices)
//! - **Neutral**: parchment (body text)
//! - **Muted**: slate gray (hints, secondary text)
//!
//! Section tones map the exhibit halls to their own colors.

use museum_core::Tone;
use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(201, 166, 90);
const POSITIVE: Color = Color::Rgb(126, 166, 94);
const NEGATIVE: Color = Color::Rgb(196, 78, 62);
const WARNING: Color = Color::Rgb(214, 157, 56);
const NEUTRAL: Color = Color::Rgb(222, 213, 196);
const MUTED: Color = Color::Rgb(122, 126, 133);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn title() -> Style {
    Style::default().fg(NEUTRAL).add_modifier(Modifier::BOLD)
}

pub fn quote() -> Style {
    Style::default().fg(NEUTRAL).add_modifier(Modifier::ITALIC)
}

pub fn cursor(base: Style) -> Style {
    base.add_modifier(Modifier::REVERSED)
}

pub fn panel_border() -> Style {
    Style::default().fg(ACCENT)
}

pub fn panel_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Concrete color for a section tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Crimson => Color::Rgb(178, 58, 72),
        Tone::Azure => Color::Rgb(86, 128, 194),
        Tone::Violet => Color::Rgb(142, 98, 184),
    }
}

/// Style for a section card line in its own tone.
pub fn tone_style(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}
