use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::model::config::IdStrategy;
use crate::model::task::{Task, TaskId};

/// Error type for task store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task already registered: {0}")]
    DuplicateTitle(String),
    #[error("task title is empty")]
    EmptyTitle,
}

/// Source of "now" in milliseconds since the Unix epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Hands out task ids from a clock
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    strategy: IdStrategy,
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new(clock: Box<dyn Clock>, strategy: IdStrategy) -> Self {
        IdGenerator {
            clock,
            strategy,
            last: None,
        }
    }

    pub fn next_id(&mut self) -> TaskId {
        let now = self.clock.now_millis();
        let id = match (self.strategy, self.last) {
            (IdStrategy::Monotonic, Some(last)) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

/// The ordered task collection and its four mutations.
///
/// The collection is never mutated in place: each successful mutation
/// builds a new slice and swaps it in. A caller holding a [`snapshot`]
/// keeps seeing the contents from before the change, and
/// `Arc::ptr_eq` between two snapshots tells whether anything changed.
///
/// [`snapshot`]: TaskStore::snapshot
pub struct TaskStore {
    tasks: Arc<[Task]>,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn with_clock(clock: Box<dyn Clock>, strategy: IdStrategy) -> Self {
        TaskStore {
            tasks: Arc::from(Vec::new()),
            ids: IdGenerator::new(clock, strategy),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn snapshot(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a new pending task. Rejects a title that exactly matches a
    /// held task's title; the collection is left untouched on error.
    pub fn add_task(&mut self, title: &str) -> Result<TaskId, TaskError> {
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.tasks.iter().any(|t| t.title == title) {
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }

        let id = self.ids.next_id();
        let mut tasks = self.tasks.to_vec();
        tasks.push(Task::new(id, title));
        self.tasks = Arc::from(tasks);
        debug!(%id, title, "task added");
        Ok(id)
    }

    /// Flip `done` on the task with `id`. Returns false if no task matched.
    pub fn toggle_task_done(&mut self, id: TaskId) -> bool {
        let changed = self.replace_with(id, |task| task.done = !task.done);
        if changed {
            debug!(%id, "task toggled");
        }
        changed
    }

    /// Drop the task with `id`, returning it. Unknown ids are a no-op.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.position(id)?;
        let removed = self.tasks[idx].clone();
        let tasks: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.tasks = Arc::from(tasks);
        debug!(%id, "task removed");
        Some(removed)
    }

    /// Replace the title of the task with `id`.
    ///
    /// Unlike [`add_task`](TaskStore::add_task) the new title is not checked
    /// for uniqueness or emptiness.
    pub fn edit_task(&mut self, id: TaskId, new_title: &str) -> bool {
        let changed = self.replace_with(id, |task| task.title = new_title.to_string());
        if changed {
            debug!(%id, title = new_title, "task edited");
        }
        changed
    }

    /// Copy the collection, apply `f` to the copy of the matching task and
    /// swap the copy in. Leaves the current collection alone if nothing matches.
    fn replace_with(&mut self, id: TaskId, f: impl FnOnce(&mut Task)) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let mut tasks = self.tasks.to_vec();
        f(&mut tasks[idx]);
        self.tasks = Arc::from(tasks);
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_clock::ManualClock;
    use pretty_assertions::assert_eq;

    fn store_at(millis: i64) -> (TaskStore, ManualClock) {
        let clock = ManualClock::at(millis);
        let store = TaskStore::with_clock(Box::new(clock.clone()), IdStrategy::Monotonic);
        (store, clock)
    }

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn add_appends_in_call_order() {
        let (mut store, clock) = store_at(1_000);
        for title in ["a", "b", "c", "d"] {
            store.add_task(title).unwrap();
            clock.advance(5);
        }
        assert_eq!(store.len(), 4);
        assert_eq!(titles(&store), vec!["a", "b", "c", "d"]);
        assert!(store.tasks().iter().all(|t| !t.done));
    }

    #[test]
    fn add_uses_clock_millis_as_id() {
        let (mut store, _clock) = store_at(1_700_000_000_123);
        let id = store.add_task("Buy milk").unwrap();
        assert_eq!(id, TaskId(1_700_000_000_123));
        assert_eq!(store.get(id).unwrap().title, "Buy milk");
    }

    #[test]
    fn duplicate_title_is_rejected() {
        let (mut store, _clock) = store_at(1);
        store.add_task("Buy milk").unwrap();
        let before = store.snapshot();

        let err = store.add_task("Buy milk").unwrap_err();
        assert_eq!(err, TaskError::DuplicateTitle("Buy milk".into()));
        assert_eq!(store.len(), 1);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn duplicate_check_is_exact() {
        let (mut store, clock) = store_at(1);
        store.add_task("Buy milk").unwrap();
        clock.advance(1);
        store.add_task("buy milk").unwrap();
        clock.advance(1);
        store.add_task("Buy milk ").unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn empty_title_is_rejected() {
        let (mut store, _clock) = store_at(1);
        assert_eq!(store.add_task(""), Err(TaskError::EmptyTitle));
        assert!(store.is_empty());
    }

    #[test]
    fn monotonic_ids_do_not_collide_within_one_millisecond() {
        let (mut store, _clock) = store_at(500);
        let a = store.add_task("a").unwrap();
        let b = store.add_task("b").unwrap();
        let c = store.add_task("c").unwrap();
        assert_eq!((a, b, c), (TaskId(500), TaskId(501), TaskId(502)));
    }

    #[test]
    fn monotonic_ids_survive_clock_going_backwards() {
        let clock = ManualClock::at(1_000);
        let mut store = TaskStore::with_clock(Box::new(clock.clone()), IdStrategy::Monotonic);
        store.add_task("a").unwrap();
        clock.0.set(900);
        assert_eq!(store.add_task("b").unwrap(), TaskId(1_001));
    }

    #[test]
    fn timestamp_ids_collide_within_one_millisecond() {
        let clock = ManualClock::at(500);
        let mut store = TaskStore::with_clock(Box::new(clock), IdStrategy::Timestamp);
        let a = store.add_task("a").unwrap();
        let b = store.add_task("b").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn toggle_is_an_involution() {
        let (mut store, _clock) = store_at(1);
        let id = store.add_task("Walk").unwrap();
        assert!(store.toggle_task_done(id));
        assert!(store.get(id).unwrap().done);
        assert!(store.toggle_task_done(id));
        assert!(!store.get(id).unwrap().done);
    }

    #[test]
    fn toggle_leaves_other_tasks_alone() {
        let (mut store, clock) = store_at(1);
        let a = store.add_task("a").unwrap();
        clock.advance(1);
        let b = store.add_task("b").unwrap();
        let before_b = store.get(b).unwrap().clone();

        store.toggle_task_done(a);
        assert_eq!(store.get(b).unwrap(), &before_b);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let (mut store, _clock) = store_at(1);
        store.add_task("a").unwrap();
        let before = store.snapshot();
        assert!(!store.toggle_task_done(TaskId(999)));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn mutation_does_not_touch_old_snapshot() {
        let (mut store, _clock) = store_at(1);
        let id = store.add_task("a").unwrap();
        let before = store.snapshot();

        store.toggle_task_done(id);
        assert!(!before[0].done);
        assert!(store.tasks()[0].done);
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn remove_drops_exactly_one_task() {
        let (mut store, clock) = store_at(1);
        let a = store.add_task("a").unwrap();
        clock.advance(1);
        let b = store.add_task("b").unwrap();
        clock.advance(1);
        let c = store.add_task("c").unwrap();

        let removed = store.remove_task(b).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(titles(&store), vec!["a", "c"]);
        assert!(store.get(a).is_some());
        assert!(store.get(c).is_some());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let (mut store, _clock) = store_at(1);
        store.add_task("a").unwrap();
        let before = store.snapshot();
        assert_eq!(store.remove_task(TaskId(7)), None);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn edit_changes_only_the_title() {
        let (mut store, clock) = store_at(1);
        let a = store.add_task("a").unwrap();
        clock.advance(1);
        let b = store.add_task("b").unwrap();
        store.toggle_task_done(a);
        let before_b = store.get(b).unwrap().clone();

        assert!(store.edit_task(a, "alpha"));
        let edited = store.get(a).unwrap();
        assert_eq!(edited.id, a);
        assert_eq!(edited.title, "alpha");
        assert!(edited.done);
        assert_eq!(store.get(b).unwrap(), &before_b);
    }

    #[test]
    fn edit_skips_uniqueness_and_emptiness_checks() {
        let (mut store, clock) = store_at(1);
        let a = store.add_task("a").unwrap();
        clock.advance(1);
        let b = store.add_task("b").unwrap();

        assert!(store.edit_task(b, "a"));
        assert_eq!(titles(&store), vec!["a", "a"]);
        assert!(store.edit_task(a, ""));
        assert_eq!(store.get(a).unwrap().title, "");
    }

    #[test]
    fn edit_unknown_id_is_noop() {
        let (mut store, _clock) = store_at(1);
        store.add_task("a").unwrap();
        assert!(!store.edit_task(TaskId(3), "z"));
        assert_eq!(titles(&store), vec!["a"]);
    }

    #[test]
    fn buy_milk_walkthrough() {
        let (mut store, _clock) = store_at(1_000);
        let id = store.add_task("Buy milk").unwrap();
        assert_eq!(store.tasks(), &[Task::new(id, "Buy milk")]);

        assert!(store.add_task("Buy milk").is_err());
        assert_eq!(store.len(), 1);

        store.toggle_task_done(id);
        assert!(store.get(id).unwrap().done);

        store.edit_task(id, "Buy oat milk");
        let task = store.get(id).unwrap();
        assert_eq!(task.title, "Buy oat milk");
        assert!(task.done);
    }
}
