//! `taskdeck shell` command: an interactive session over one controller.
//!
//! Unlike the one-shot commands, the task list and the search overlay live
//! for the whole session, so a search stays on screen until it is cleared.

use std::io::{BufRead, Write};

use super::output::render_view;
use crate::controller::TaskController;

const HELP: &str = "\
commands:
  list                         show the current view
  add <title> [| description]  create a task
  toggle <id>                  flip a task between open and done
  delete <id>                  delete a task
  search <query>               search (empty query clears, 1 character is ignored)
  clear                        drop search results
  reload                       fetch the whole list again
  help                         show this text
  quit                         leave the shell";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    List,
    Add { title: String, description: Option<String> },
    Toggle(String),
    Delete(String),
    Search(String),
    Clear,
    Reload,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let require = |what: &str| -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("{word}: missing {what}"))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word {
        "list" | "ls" => ShellCommand::List,
        "add" => {
            let raw = require("title")?;
            match raw.split_once('|') {
                Some((title, description)) => ShellCommand::Add {
                    title: title.trim().to_string(),
                    description: Some(description.trim().to_string()),
                },
                None => ShellCommand::Add { title: raw, description: None },
            }
        }
        "toggle" | "done" => ShellCommand::Toggle(require("task id")?),
        "delete" | "rm" => ShellCommand::Delete(require("task id")?),
        "search" | "/" => ShellCommand::Search(rest.to_string()),
        "clear" => ShellCommand::Clear,
        "reload" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command {other:?}; type `help`")),
    };
    Ok(Some(command))
}

/// Execute the `shell` command on stdin and stdout.
///
/// # Errors
///
/// Returns an error string if reading input or writing output fails.
pub async fn run(controller: &TaskController) -> Result<(), String> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(controller, stdin.lock(), &mut stdout).await
}

/// Runs a session reading commands from `input` and writing to `out`.
///
/// Intent failures are reported inline and the session continues.
///
/// # Errors
///
/// Returns an error string on I/O failure.
pub async fn run_session<R, W>(controller: &TaskController, input: R, out: &mut W) -> Result<(), String>
where
    R: BufRead,
    W: Write,
{
    let io_err = |e: std::io::Error| format!("Shell I/O failed: {e}");

    if let Err(e) = controller.load().await {
        writeln!(out, "error: {e} (type `reload` to retry)").map_err(io_err)?;
    }
    writeln!(out, "{}", render_view(&controller.visible())).map_err(io_err)?;

    for line in input.lines() {
        let line = line.map_err(io_err)?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "error: {message}").map_err(io_err)?;
                continue;
            }
        };

        let outcome = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(out, "{HELP}").map_err(io_err)?;
                continue;
            }
            ShellCommand::List => Ok(()),
            ShellCommand::Add { title, description } => {
                controller.add_task(&title, description).await.map(|_| ())
            }
            ShellCommand::Toggle(id) => controller.toggle(&id).await.map(|_| ()),
            ShellCommand::Delete(id) => controller.delete(&id).await,
            ShellCommand::Search(query) => controller.search(&query).await,
            ShellCommand::Clear => {
                controller.clear_search();
                Ok(())
            }
            ShellCommand::Reload => controller.reload().await,
        };

        if let Err(e) = outcome {
            writeln!(out, "error: {e}").map_err(io_err)?;
        }
        writeln!(out, "{}", render_view(&controller.visible())).map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}
