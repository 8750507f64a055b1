use tracing::debug;

use crate::model::task::{Task, TaskId};
use crate::ops::task_store::TaskStore;

/// What happens when a confirmation is affirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveTask { id: TaskId },
}

/// The user's answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    No,
    Yes,
}

impl Choice {
    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Choice::No => "No",
            Choice::Yes => "Yes",
        }
    }

    /// The other option (Left/Right focus movement)
    pub fn other(self) -> Choice {
        match self {
            Choice::No => Choice::Yes,
            Choice::Yes => Choice::No,
        }
    }
}

/// A two-option prompt that defers a destructive store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
    /// Option that Enter picks. Starts on the cancel option.
    pub focused: Choice,
}

impl ConfirmPrompt {
    pub fn remove_task(id: TaskId) -> Self {
        ConfirmPrompt {
            title: "Remove item".to_string(),
            message: "Are you sure you want to remove this item?".to_string(),
            action: ConfirmAction::RemoveTask { id },
            focused: Choice::No,
        }
    }

    /// Consume the prompt. Only `Choice::Yes` touches the store.
    pub fn resolve(self, choice: Choice, store: &mut TaskStore) -> Option<Task> {
        debug!(action = ?self.action, choice = choice.label(), "confirmation resolved");
        match (choice, self.action) {
            (Choice::Yes, ConfirmAction::RemoveTask { id }) => store.remove_task(id),
            (Choice::No, _) => None,
        }
    }
}
