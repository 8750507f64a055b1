use crate::ops::task_store::TaskError;

/// A blocking message box. Dismissed by any key; never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The notice shown when a store operation is rejected
    pub fn from_error(err: &TaskError) -> Self {
        match err {
            TaskError::DuplicateTitle(_) => Notice::new(
                "Task already registered",
                "You cannot register a task with the same name",
            ),
            TaskError::EmptyTitle => Notice::new("Empty task", "A task needs a title"),
        }
    }
}
