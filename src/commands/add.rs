//! `taskdeck add` command.

use super::output::render_task;
use crate::controller::TaskController;

/// Execute the `add` command.
///
/// Goes through the creation form so the same success and failure rules
/// apply as in an interactive session.
///
/// # Errors
///
/// Returns an error string if loading or creating fails.
pub async fn run(controller: &TaskController, title: &str, description: Option<&str>) -> Result<(), String> {
    controller.load().await.map_err(|e| format!("Failed to load tasks: {e}"))?;
    controller.open_form();
    controller.edit_form(|form| {
        form.title = title.to_string();
        form.description = description.unwrap_or_default().to_string();
    });
    let task = controller.submit_form().await.map_err(|e| format!("Failed to create task: {e}"))?;
    println!("Created:\n{}", render_task(&task));
    Ok(())
}
