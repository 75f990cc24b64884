//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI parser for `spec-manager`.
#[derive(Debug, Parser)]
#[command(name = "spec-manager", version, about = "Spec-driven development manager")]
pub struct Cli {
    /// Project root holding `specs/` [default: $SPEC_MANAGER_ROOT, else current directory].
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// YAML config file [default: <root>/.spec-manager.yaml].
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// The command to execute; prints help when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tasks with a given status.
    List {
        /// Task status to list: backlog, in-progress, or completed.
        #[arg(long, default_value = "backlog", value_name = "STATUS")]
        status: String,
    },
    /// Show task details.
    Show {
        /// Task ID (e.g., TASK-001).
        task_id: String,
    },
    /// Move a task to a different status.
    Move {
        /// Task ID.
        task_id: String,
        /// New status: backlog, in-progress, or completed.
        status: String,
    },
    /// Generate an AI implementation prompt.
    Prompt {
        /// Task ID.
        task_id: String,
    },
    /// Validate an implementation against the task's acceptance criteria.
    Validate {
        /// Task ID.
        task_id: String,
        /// Implementation path.
        #[arg(long)]
        path: Option<String>,
    },
    /// Generate a progress report.
    Report,
    /// Print a specification document from the specs directory.
    Spec {
        /// Path relative to `specs/` (e.g., context/architecture.md).
        path: String,
    },
}
