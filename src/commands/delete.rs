//! `taskdeck delete` command.

use crate::controller::TaskController;

/// Execute the `delete` command.
///
/// # Errors
///
/// Returns an error string if loading fails, the id is unknown, or the
/// store rejects the deletion.
pub async fn run(controller: &TaskController, id: &str) -> Result<(), String> {
    controller.load().await.map_err(|e| format!("Failed to load tasks: {e}"))?;
    controller.delete(id).await.map_err(|e| format!("Failed to delete task: {e}"))?;
    println!("Deleted task {id}. {} task(s) left.", controller.tasks().len());
    Ok(())
}
