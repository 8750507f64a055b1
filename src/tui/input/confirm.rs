use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::confirm::Choice;
use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.screen.resolve_confirm(Choice::Yes),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.screen.resolve_confirm(Choice::No)
        }
        KeyCode::Enter => {
            let choice = app
                .screen
                .confirm
                .as_ref()
                .map_or(Choice::No, |prompt| prompt.focused);
            app.screen.resolve_confirm(choice);
        }
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Char('h')
        | KeyCode::Char('l') => {
            if let Some(prompt) = &mut app.screen.confirm {
                prompt.focused = prompt.focused.other();
            }
        }
        _ => {}
    }
}
