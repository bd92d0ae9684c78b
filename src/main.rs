//! Binary entrypoint for the `taskdeck` CLI.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Recording is handled in commands::dispatch via TASKDECK_RECORD=<dir>.
    match taskdeck::run(std::env::args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
