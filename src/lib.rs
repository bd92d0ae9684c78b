//! Core library entry for the `taskdeck` CLI.
//!
//! The task list lives on a remote store; [`controller::TaskController`]
//! keeps a local copy in step with it through the [`ports::TaskGateway`]
//! boundary.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod logging;
pub mod ports;
pub mod task;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Variables from a `.env` file in the working directory are loaded first,
/// so `TASKDECK_BASE_URL` can live there.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let _ = dotenvy::dotenv();
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli).await
}

#[cfg(test)]
mod tests {
    use super::run;

    #[tokio::test]
    async fn run_errors_on_unknown_subcommand() {
        let result = run(["taskdeck", "unknown"]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_rejects_invalid_base_url() {
        let result = run(["taskdeck", "list", "--base-url", "not a url"]).await;
        assert!(result.unwrap_err().contains("Invalid task store URL"));
    }

    #[tokio::test]
    async fn run_reports_unreachable_store() {
        let result = run(["taskdeck", "list", "--base-url", "http://127.0.0.1:9"]).await;
        assert!(result.unwrap_err().contains("Failed to load tasks"));
    }
}
