//! Keyboard input dispatch — overlays first, then global keys, then the
//! active screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use museum_core::Certificate;

use crate::app::{AppState, Overlay, OverviewItem};
use crate::export;
use crate::ui::detail;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Screen-specific keys.
    if app.exhibit.active().is_some() {
        handle_detail_key(app, key);
    } else {
        handle_overview_key(app, key);
    }
}

fn handle_overview_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let rows = app.overview_row_count();
            if rows > 0 && app.overview_cursor + 1 < rows {
                app.overview_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.overview_cursor = app.overview_cursor.saturating_sub(1);
        }
        KeyCode::Enter => match app.cursor_item() {
            Some(OverviewItem::Section(id)) => {
                app.exhibit.activate(Some(id));
                app.detail_scroll = 0;
            }
            Some(OverviewItem::Location(id)) => {
                app.exhibit.toggle_select(&id);
            }
            None => {}
        },
        KeyCode::Char(' ') => {
            // Space only toggles map locations, never enters a hall.
            if let Some(OverviewItem::Location(id)) = app.cursor_item() {
                app.exhibit.toggle_select(&id);
            }
        }
        KeyCode::Char('c') => {
            export_certificate(app);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.exhibit.activate(None);
            app.detail_scroll = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let max = detail::line_count(app).saturating_sub(1);
            if app.detail_scroll < max {
                app.detail_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn export_certificate(app: &mut AppState) {
    let Some(cert) = Certificate::issue(&app.exhibit) else {
        app.set_warning("Сертификат доступен после посещения всех разделов");
        return;
    };
    let path = export::default_certificate_path(&cert);
    match export::write_certificate(&path, &cert) {
        Ok(written) => app.set_status(format!("Сертификат сохранён: {}", written.display())),
        Err(err) => app.set_error(format!("Не удалось сохранить сертификат: {err}")),
    }
}
