use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::tui::input_collector::EntryFocus;

use super::*;

pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Send key on the field, or pressing the add button
        (_, KeyCode::Enter) | (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
            submit_entry(app);
        }
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => app.entry.toggle_focus(),
        (_, KeyCode::Esc) | (_, KeyCode::Down) => {
            app.entry.focus = EntryFocus::Field;
            app.mode = Mode::Navigate;
        }
        (KeyModifiers::NONE, KeyCode::Char(' ')) if app.entry.focus == EntryFocus::AddButton => {
            submit_entry(app);
        }
        _ => {
            if app.entry.focus == EntryFocus::Field {
                app.entry.field.handle_key(key);
            }
        }
    }
}

fn submit_entry(app: &mut App) {
    let before = app.task_count();
    app.entry.submit(&mut app.screen);
    if app.task_count() > before {
        // Follow the new row so it is visible
        app.cursor = app.task_count() - 1;
    }
    app.entry.focus = EntryFocus::Field;
}
