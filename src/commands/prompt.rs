//! `spec-manager prompt` command.

use crate::error::Result;
use crate::prompt::implementation_prompt;
use crate::store::TaskStore;

/// Execute the `prompt` command.
///
/// # Errors
///
/// Returns an error if the task cannot be found or read.
pub fn run(store: &TaskStore<'_>, task_id: &str) -> Result<()> {
    let task = store.find_task(task_id)?;
    println!("{}", implementation_prompt(&task));
    Ok(())
}
