use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_row_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let Some(edit) = app.row_edit.take() else {
                app.mode = Mode::Navigate;
                return;
            };
            app.mode = Mode::Navigate;
            route_gesture(
                &mut app.screen,
                edit.id,
                RowGesture::EditSubmit(edit.field.text().to_string()),
            );
        }
        KeyCode::Esc => app.cancel_row_edit(),
        _ => {
            if let Some(edit) = &mut app.row_edit {
                edit.field.handle_key(key);
            }
        }
    }
}
