use serde::Serialize;

use crate::model::task::Task;
use crate::tui::render::header::count_label;

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub count: usize,
    pub tasks: &'a [Task],
}

/// `N tasks` then one `[x] title` line per task
pub fn format_task_list(tasks: &[Task]) -> String {
    let mut out = count_label(tasks.len());
    out.push('\n');
    for task in tasks {
        out.push_str(&format!("[{}] {}\n", task.checkbox_char(), task.title));
    }
    out
}

pub fn task_list_json(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TaskListJson {
        count: tasks.len(),
        tasks,
    })
}
