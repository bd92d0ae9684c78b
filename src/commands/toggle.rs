//! `taskdeck toggle` command.

use crate::controller::TaskController;

/// Execute the `toggle` command.
///
/// # Errors
///
/// Returns an error string if loading fails, the id is unknown, or the
/// store rejects the update.
pub async fn run(controller: &TaskController, id: &str) -> Result<(), String> {
    controller.load().await.map_err(|e| format!("Failed to load tasks: {e}"))?;
    let completed = controller.toggle(id).await.map_err(|e| format!("Failed to toggle task: {e}"))?;
    let state = if completed { "done" } else { "open" };
    println!("Task {id} is now {state}.");
    Ok(())
}
