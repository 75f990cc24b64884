//! Command dispatch and handlers.

pub mod list;
pub mod move_task;
pub mod prompt;
pub mod report;
pub mod show;
pub mod spec;
pub mod validate;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::store::TaskStore;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns the error of the selected command handler.
pub fn dispatch(command: &Command, config: &Config) -> Result<()> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, config)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns the error of the selected command handler.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<()> {
    let specs = config.specs_path();
    let store = TaskStore::new(ctx, &specs);
    match command {
        Command::List { status } => list::run(&store, status),
        Command::Show { task_id } => show::run(&store, task_id),
        Command::Move { task_id, status } => move_task::run(&store, task_id, status),
        Command::Prompt { task_id } => prompt::run(&store, task_id),
        Command::Validate { task_id, path } => validate::run(&store, task_id, path.as_deref()),
        Command::Report => report::run(&store),
        Command::Spec { path } => spec::run(&store, path),
    }
}
