//! `taskdeck list` command.

use super::output::render_view;
use crate::controller::TaskController;

/// Execute the `list` command: print the canonical task list.
///
/// # Errors
///
/// Returns an error string if the task list cannot be loaded.
pub async fn run(controller: &TaskController) -> Result<(), String> {
    controller.load().await.map_err(|e| format!("Failed to load tasks: {e}"))?;
    println!("{}", render_view(&controller.visible()));
    Ok(())
}
