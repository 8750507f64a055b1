mod confirm;
mod entry;
mod list;
mod row_edit;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::input_collector::EntryFocus;

// Submodules reach each other's handlers through `use super::*;`
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use entry::*;
#[allow(unused_imports)]
use list::*;
#[allow(unused_imports)]
use row_edit::*;

pub use list::{RowGesture, route_gesture};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A notice blocks everything until dismissed by any key
    if app.screen.notice.is_some() {
        app.screen.dismiss_notice();
        return;
    }

    // A pending confirmation captures all input
    if app.screen.confirm.is_some() {
        handle_confirm(app, key);
        app.clamp_cursor();
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Entry => handle_entry(app, key),
        Mode::Navigate => handle_list(app, key),
        Mode::Edit => handle_row_edit(app, key),
    }
    app.clamp_cursor();
}

/// Handle a bracketed paste. Only lands in a focused text field.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.screen.notice.is_some() || app.screen.confirm.is_some() {
        return;
    }
    match app.mode {
        Mode::Entry if app.entry.focus == EntryFocus::Field => app.entry.field.insert_str(text),
        Mode::Edit => {
            if let Some(edit) = &mut app.row_edit {
                edit.field.insert_str(text);
            }
        }
        _ => {}
    }
}
