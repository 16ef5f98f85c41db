//! Overlay widgets — welcome and help popups.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme;
use crate::ui::centered_rect;

/// Launch welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 45, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Омск Достоевского ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Добро пожаловать в виртуальный музей.", theme::neutral())),
        Line::from(""),
        Line::from(Span::styled("С чего начать:", theme::accent_bold())),
        Line::from(""),
        line("j/k", "перемещение по разделам и карте"),
        line("Enter", "войти в раздел или раскрыть место на карте"),
        line("Esc", "вернуться к обзору"),
        line("c", "сертификат исследователя (после всех разделов)"),
        line("?", "справка по клавишам"),
        Line::from(""),
        Line::from(Span::styled(
            "Нажмите любую клавишу, чтобы продолжить...",
            theme::muted(),
        )),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Key reference overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Справка [Esc]закрыть ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        section("Обзор"),
        line("j / ↓, k / ↑", "курсор по разделам и карте"),
        line("Enter", "войти в раздел / раскрыть место"),
        line("Space", "раскрыть или свернуть место на карте"),
        line("c", "сохранить сертификат исследователя"),
        Line::from(""),
        section("Раздел"),
        line("j / ↓, k / ↑", "прокрутка текста"),
        line("Esc, Backspace, b", "вернуться к обзору"),
        Line::from(""),
        section("Всегда"),
        line("?", "эта справка"),
        line("q", "выход"),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn section(name: &str) -> Line<'_> {
    Line::from(Span::styled(name, theme::accent_bold()))
}

fn line<'a>(keys: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{keys:<18}"), theme::accent()),
        Span::styled(action, theme::muted()),
    ])
}
