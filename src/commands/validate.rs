//! `spec-manager validate` command.

use crate::error::Result;
use crate::store::TaskStore;
use crate::validate::validate_implementation;

/// Execute the `validate` command, printing the result as pretty JSON.
///
/// # Errors
///
/// Returns an error if the task cannot be found or the result cannot be serialized.
pub fn run(store: &TaskStore<'_>, task_id: &str, path: Option<&str>) -> Result<()> {
    let task = store.find_task(task_id)?;
    let report = validate_implementation(&task, path, store.context().clock.now());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
