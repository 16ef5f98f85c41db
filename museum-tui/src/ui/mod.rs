//! Top-level UI layout — one framed screen with a status bar.

pub mod detail;
pub mod overlays;
pub mod overview;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_screen(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Draw overlays on top.
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::None => {}
    }
}

/// Draw the active screen with its border.
fn draw_screen(f: &mut Frame, area: Rect, app: &AppState) {
    let title = match app.exhibit.active_section() {
        Some(section) => format!(" {} {} ", section.icon.glyph(), section.title),
        None => " Омск Достоевского ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(title)
        .title_style(theme::panel_title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.exhibit.active().is_some() {
        detail::render(f, inner, app);
    } else {
        overview::render(f, inner, app);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
