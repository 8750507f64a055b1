use crate::model::TaskId;

/// The operations a screen hands down to its child components.
///
/// Components never touch the task collection directly; they receive
/// `&mut dyn TaskActions` and call these. What each call does beyond the
/// store (opening a confirmation, showing a notice) is up to the implementor.
pub trait TaskActions {
    fn add_task(&mut self, title: &str);
    fn toggle_task_done(&mut self, id: TaskId);
    fn remove_task(&mut self, id: TaskId);
    fn edit_task(&mut self, id: TaskId, new_title: &str);
}
