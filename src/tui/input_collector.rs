use crate::ops::TaskActions;

use super::text_field::TextField;

/// Which part of the entry row has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryFocus {
    #[default]
    Field,
    AddButton,
}

/// The "new task" entry row: a text field plus an add button
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pub field: TextField,
    pub focus: EntryFocus,
}

impl InputCollector {
    pub fn text(&self) -> &str {
        self.field.text()
    }

    /// Forward the held text to `add_task` and clear the field.
    ///
    /// Empty text is ignored without any message. The field is cleared
    /// whether or not the add was accepted. Returns true if `add_task` ran.
    pub fn submit(&mut self, actions: &mut dyn TaskActions) -> bool {
        if self.field.is_empty() {
            return false;
        }
        let title = self.field.take();
        actions.add_task(&title);
        true
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EntryFocus::Field => EntryFocus::AddButton,
            EntryFocus::AddButton => EntryFocus::Field,
        };
    }
}
