//! Plain-text rendering of the controller's view.

use std::fmt::Write as _;

use crate::controller::View;
use crate::task::Task;

/// Renders one task as a checkbox line, with its description indented below.
#[must_use]
pub fn render_task(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    let mut line = format!("[{mark}] {}  ({})  id={}", task.title, task.created_date(), task.id);
    if !task.description.is_empty() {
        let _ = write!(line, "\n    {}", task.description);
    }
    line
}

/// Renders whatever the view says should be on screen.
#[must_use]
pub fn render_view(view: &View) -> String {
    match view {
        View::Loading => "Loading tasks...".to_string(),
        View::LoadFailed(message) => format!("Could not load tasks: {message}"),
        View::Tasks(tasks) if tasks.is_empty() => "No tasks yet.".to_string(),
        View::NoMatches => "No task found".to_string(),
        View::Tasks(tasks) | View::Hits(tasks) => {
            tasks.iter().map(render_task).collect::<Vec<_>>().join("\n")
        }
    }
}
