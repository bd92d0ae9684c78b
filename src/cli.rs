//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::BASE_URL_ENV;

/// Top-level CLI parser for `taskdeck`.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "Manage a personal task list on a remote task store")]
pub struct Cli {
    /// Base URL of the task store.
    #[arg(long, global = true, env = BASE_URL_ENV, value_name = "URL")]
    pub base_url: Option<String>,

    /// Tracing filter (e.g. "info", "debug", or full directives).
    #[arg(long = "log", global = true, value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all tasks.
    List,
    /// Create a task.
    Add {
        /// Task title.
        title: String,
        /// Optional description.
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Flip a task between open and done.
    Toggle {
        /// Task id.
        id: String,
    },
    /// Delete a task.
    Delete {
        /// Task id.
        id: String,
    },
    /// Search tasks (queries shorter than two characters are ignored).
    Search {
        /// Search text.
        query: String,
    },
    /// Interactive session keeping one task list in memory.
    Shell,
}
