//! `taskdeck search` command.

use super::output::render_view;
use crate::controller::{TaskController, MIN_QUERY_CHARS};

/// Execute the `search` command and print the overlay.
///
/// A query too short to be sent leaves the canonical list on screen.
///
/// # Errors
///
/// Returns an error string if loading or searching fails.
pub async fn run(controller: &TaskController, query: &str) -> Result<(), String> {
    controller.load().await.map_err(|e| format!("Failed to load tasks: {e}"))?;
    if !query.is_empty() && query.chars().count() < MIN_QUERY_CHARS {
        eprintln!("Query too short; type at least {MIN_QUERY_CHARS} characters to search.");
    }
    controller.search(query).await.map_err(|e| format!("Search failed: {e}"))?;
    println!("{}", render_view(&controller.visible()));
    Ok(())
}
