//! Detail screen — quote, description, image caption, key points, quest
//! task for the active section.
//!
//! The lines are built once per frame by `build_lines`; `line_count` gives
//! the input layer the same total so scrolling stays inside the content.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use museum_core::Catalog;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let lines = build_lines(app);
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll as u16, 0));
    f.render_widget(para, area);
}

/// Number of content lines the detail screen currently holds.
pub fn line_count(app: &AppState) -> usize {
    build_lines(app).len()
}

/// Build the full line list for the active section. Empty when no section
/// is active.
pub fn build_lines(app: &AppState) -> Vec<Line<'static>> {
    let (Some(section), Some(content)) =
        (app.exhibit.active_section(), app.exhibit.active_content())
    else {
        return Vec::new();
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "← Вернуться к разделам [Esc]",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(format!("{} ", section.icon.glyph()), theme::tone_style(section.tone)),
        Span::styled(section.title.clone(), theme::title()),
        Span::styled(format!("  {}", section.subtitle), theme::muted()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(content.quote.clone(), theme::quote())));
    lines.push(Line::from(Span::styled(
        "— Ф.М. Достоевский",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        content.description.clone(),
        theme::neutral(),
    )));
    lines.push(Line::from(""));

    if let Some(image) = &content.image {
        lines.push(Line::from(vec![
            Span::styled("▣ ", theme::accent()),
            Span::styled(image.caption.clone(), theme::quote()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", image.url),
            theme::muted(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Ключевые точки",
        theme::accent_bold(),
    )));
    for point in &content.points {
        lines.push(Line::from(vec![
            Span::styled("  ⌖ ", theme::accent()),
            Span::styled(point.name.clone(), theme::title()),
            Span::styled(format!("  [{}]", point.years), theme::warning()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", point.description),
            theme::muted(),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Задание квеста", theme::accent_bold())));
    lines.push(Line::from(Span::styled(
        Catalog::quest_task(section.id).to_string(),
        theme::neutral(),
    )));
    lines.push(Line::from(Span::styled("+1 достижение", theme::positive())));

    lines
}
