use crossterm::event::{KeyCode, KeyEvent};

use crate::model::TaskId;
use crate::ops::TaskActions;
use crate::tui::app::{App, Mode};

use super::*;

/// A per-row gesture from the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowGesture {
    Toggle,
    Delete,
    EditSubmit(String),
}

/// Send a row gesture to the screen's task operations
pub fn route_gesture(actions: &mut dyn TaskActions, id: TaskId, gesture: RowGesture) {
    match gesture {
        RowGesture::Toggle => actions.toggle_task_done(id),
        RowGesture::Delete => actions.remove_task(id),
        RowGesture::EditSubmit(title) => actions.edit_task(id, &title),
    }
}

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => app.mode = Mode::Entry,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.task_count() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.cursor == 0 {
                app.mode = Mode::Entry;
            } else {
                app.cursor -= 1;
            }
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = app.task_count().saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            gesture_on_cursor(app, RowGesture::Toggle);
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            gesture_on_cursor(app, RowGesture::Delete);
        }
        KeyCode::Char('e') => app.begin_row_edit(),
        _ => {}
    }
}

pub(super) fn gesture_on_cursor(app: &mut App, gesture: RowGesture) {
    if let Some(id) = app.cursor_task_id() {
        route_gesture(&mut app.screen, id, gesture);
    }
}
