//! Overview screen — header, progress gauge, section cards, literary map,
//! quest block.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use museum_core::QUEST_HASHTAG;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(2), // progress
            Constraint::Min(8),    // cards + map
            Constraint::Length(4), // quest block
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_progress(f, chunks[1], app);
    render_lists(f, chunks[2], app);
    render_quest(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("◫ ", theme::accent_bold()),
            Span::styled("Омск Достоевского", theme::title()),
        ]),
        Line::from(Span::styled("Каторга, вера и слово", theme::quote())),
        Line::from(Span::styled(
            "Виртуальный музей, посвящённый пребыванию Ф.М. Достоевского в Омске. \
             Пройдите путь писателя через острог, собор и слово.",
            theme::muted(),
        )),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn render_progress(f: &mut Frame, area: Rect, app: &AppState) {
    let progress = app.exhibit.progress();
    let label = format!(
        "Прогресс исследования: {} / {}  ({}%)",
        progress.visited,
        progress.total,
        progress.display_percent()
    );
    let gauge = Gauge::default()
        .gauge_style(theme::accent())
        .ratio(progress.percent() / 100.0)
        .label(Span::styled(label, theme::neutral()));
    f.render_widget(gauge, area);
}

fn render_lists(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    let mut row = 0usize;

    lines.push(Line::from(Span::styled("Разделы", theme::accent_bold())));
    for section in app.exhibit.sections() {
        let is_cursor = row == app.overview_cursor;
        let base = theme::tone_style(section.tone);
        let style = if is_cursor { theme::cursor(base) } else { base };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{} ", section.icon.glyph()), base),
            Span::styled(section.title.as_str(), style),
            Span::styled(format!("  {}", section.subtitle), theme::muted()),
        ];
        if section.visited {
            spans.push(Span::styled("  ✓ Пройдено", theme::positive()));
        }
        lines.push(Line::from(spans));
        row += 1;
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Литературная карта Омска",
        theme::accent_bold(),
    )));
    lines.push(Line::from(Span::styled(
        "Интерактивная карта мест, связанных с пребыванием Достоевского",
        theme::muted(),
    )));

    for location in app.exhibit.locations() {
        let is_cursor = row == app.overview_cursor;
        let is_selected = app.exhibit.is_selected(&location.id);
        let base = theme::tone_style(
            app.exhibit
                .sections()
                .iter()
                .find(|s| s.id == location.category)
                .map(|s| s.tone)
                .unwrap_or(museum_core::Tone::Crimson),
        );
        let style = if is_cursor {
            theme::cursor(base)
        } else if is_selected {
            theme::accent_bold()
        } else {
            base
        };

        let marker = if is_selected { "▾" } else { "▸" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {marker} {} ", location.icon.glyph()), base),
            Span::styled(location.name.as_str(), style),
            Span::styled(format!("  {}", location.description), theme::muted()),
        ]));
        row += 1;

        // Selected location expands into its coordinate line.
        if is_selected {
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled("⌖ ", theme::accent()),
                Span::styled(location.coordinates.as_str(), theme::accent()),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn render_quest(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled("Онлайн-квест", theme::accent_bold())),
        Line::from(Span::styled(
            "Выполните задания во всех разделах, чтобы получить сертификат \
             исследователя литературного наследия Достоевского",
            theme::muted(),
        )),
    ];
    if app.exhibit.is_complete() {
        lines.push(Line::from(vec![
            Span::styled("✓ Все разделы пройдены — нажмите ", theme::positive()),
            Span::styled("c", theme::accent_bold()),
            Span::styled(" для сертификата  ", theme::positive()),
            Span::styled(QUEST_HASHTAG, theme::accent()),
        ]));
    } else {
        lines.push(Line::from(Span::styled(QUEST_HASHTAG, theme::accent())));
    }
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
