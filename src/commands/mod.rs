//! Command dispatch and handlers.

pub mod add;
pub mod delete;
pub mod list;
pub mod output;
pub mod search;
pub mod shell;
pub mod toggle;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::{ClientConfig, RECORD_ENV};
use crate::context::ServiceContext;
use crate::controller::TaskController;

/// Dispatch a parsed command to its handler.
///
/// When `TASKDECK_RECORD` is set to a directory path, all gateway traffic is
/// recorded to a cassette file in a timestamped directory below it.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub async fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = ClientConfig::resolve(cli.base_url.as_deref(), cli.log_filter.clone())?;
    crate::logging::init(config.log_filter.as_deref())?;

    let (ctx, session) = if let Ok(path) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(&config, &PathBuf::from(path))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config), None)
    };

    let result = dispatch_with_context(&cli.command, &ctx).await;

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the command handler fails.
pub async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let controller = TaskController::new(ctx.gateway.clone());
    match command {
        Command::List => list::run(&controller).await,
        Command::Add { title, description } => add::run(&controller, title, description.as_deref()).await,
        Command::Toggle { id } => toggle::run(&controller, id).await,
        Command::Delete { id } => delete::run(&controller, id).await,
        Command::Search { query } => search::run(&controller, query).await,
        Command::Shell => shell::run(&controller).await,
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
