use crossterm::event::{KeyCode, KeyEvent};

use crate::frontend::{App, UIEvent};

const PAGE_SIZE: i16 = 10;

pub fn on_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Accepting the dialog closes it, whatever state the check is in
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => app.send_ui_event(UIEvent::Quit),
        KeyCode::Char('c') => app.send_ui_event(UIEvent::CopyReleaseUrl),
        KeyCode::Down | KeyCode::Char('j') => scroll_notes(app, 1),
        KeyCode::Up | KeyCode::Char('k') => scroll_notes(app, -1),
        KeyCode::PageDown => scroll_notes(app, PAGE_SIZE),
        KeyCode::PageUp => scroll_notes(app, -PAGE_SIZE),
        KeyCode::Home => app.notes_scroll = 0,
        _ => (),
    }
}

fn scroll_notes(app: &mut App, delta: i16) {
    let Some(notes) = app.dialog.notes() else {
        return;
    };

    let max_scroll =
        u16::try_from(notes.lines().count().saturating_sub(1)).unwrap_or(u16::MAX);

    app.notes_scroll = app
        .notes_scroll
        .saturating_add_signed(delta)
        .min(max_scroll);
}
