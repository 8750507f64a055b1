use tracing::info;

use crate::model::TaskId;
use crate::ops::TaskActions;
use crate::ops::confirm::{Choice, ConfirmPrompt};
use crate::ops::notice::Notice;
use crate::ops::task_store::TaskStore;

/// Screen-level state holder: the task store plus the prompts it can raise.
///
/// This is the only owner of the task collection. Child components reach it
/// through [`TaskActions`].
pub struct Screen {
    pub store: TaskStore,
    /// Pending Yes/No prompt. While set, nothing else may mutate the store.
    pub confirm: Option<ConfirmPrompt>,
    /// Pending blocking notice
    pub notice: Option<Notice>,
    /// Short description of the last change, for the status row
    pub status_message: Option<String>,
}

impl Screen {
    pub fn new(store: TaskStore) -> Self {
        Screen {
            store,
            confirm: None,
            notice: None,
            status_message: None,
        }
    }

    /// Answer the pending confirmation prompt, if any
    pub fn resolve_confirm(&mut self, choice: Choice) {
        let Some(prompt) = self.confirm.take() else {
            return;
        };
        if let Some(task) = prompt.resolve(choice, &mut self.store) {
            self.status_message = Some(format!("removed \"{}\"", task.title));
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl TaskActions for Screen {
    fn add_task(&mut self, title: &str) {
        match self.store.add_task(title) {
            Ok(_) => {
                self.status_message = Some(format!("added \"{}\"", title));
            }
            Err(e) => {
                info!(error = %e, "add rejected");
                self.notice = Some(Notice::from_error(&e));
            }
        }
    }

    fn toggle_task_done(&mut self, id: TaskId) {
        self.store.toggle_task_done(id);
    }

    fn remove_task(&mut self, id: TaskId) {
        if self.store.get(id).is_none() {
            return;
        }
        info!(%id, "asking before remove");
        self.confirm = Some(ConfirmPrompt::remove_task(id));
    }

    fn edit_task(&mut self, id: TaskId, new_title: &str) {
        if self.store.edit_task(id, new_title) {
            self.status_message = Some("title updated".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::config::IdStrategy;
    use crate::ops::task_store::test_clock::ManualClock;

    fn screen() -> (Screen, ManualClock) {
        let clock = ManualClock::at(1_000);
        let store = TaskStore::with_clock(Box::new(clock.clone()), IdStrategy::Monotonic);
        (Screen::new(store), clock)
    }

    #[test]
    fn duplicate_add_raises_one_notice() {
        let (mut screen, _clock) = screen();
        screen.add_task("Buy milk");
        assert!(screen.notice.is_none());
        screen.add_task("Buy milk");
        assert_eq!(screen.store.len(), 1);
        assert_eq!(
            screen.notice.as_ref().map(|n| n.title.as_str()),
            Some("Task already registered")
        );
    }

    #[test]
    fn remove_waits_for_confirmation() {
        let (mut screen, _clock) = screen();
        screen.add_task("a");
        let id = screen.store.tasks()[0].id;
        let before = screen.store.snapshot();

        screen.remove_task(id);
        assert!(screen.confirm.is_some());
        assert!(Arc::ptr_eq(&before, &screen.store.snapshot()));

        screen.resolve_confirm(Choice::No);
        assert!(screen.confirm.is_none());
        assert_eq!(screen.store.len(), 1);

        screen.remove_task(id);
        screen.resolve_confirm(Choice::Yes);
        assert!(screen.store.is_empty());
        assert_eq!(screen.status_message.as_deref(), Some("removed \"a\""));
    }

    #[test]
    fn remove_of_unknown_id_opens_nothing() {
        let (mut screen, _clock) = screen();
        screen.remove_task(TaskId(1));
        assert!(screen.confirm.is_none());
    }

    #[test]
    fn resolve_without_prompt_is_noop() {
        let (mut screen, _clock) = screen();
        screen.add_task("a");
        screen.resolve_confirm(Choice::Yes);
        assert_eq!(screen.store.len(), 1);
    }

    #[test]
    fn toggle_and_edit_delegate_to_store() {
        let (mut screen, _clock) = screen();
        screen.add_task("Buy milk");
        let id = screen.store.tasks()[0].id;
        screen.toggle_task_done(id);
        screen.edit_task(id, "Buy oat milk");
        let task = screen.store.get(id).unwrap();
        assert!(task.done);
        assert_eq!(task.title, "Buy oat milk");
    }
}
