//! `spec-manager move` command.

use crate::error::Result;
use crate::store::TaskStore;
use crate::transition;

/// Execute the `move` command.
///
/// # Errors
///
/// Returns an error if the status is unknown, the task is missing, or the move fails.
pub fn run(store: &TaskStore<'_>, task_id: &str, status: &str) -> Result<()> {
    let moved = transition::update_status(store, task_id, status)?;
    println!("{moved}");
    Ok(())
}
