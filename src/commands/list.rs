//! `spec-manager list` command.

use crate::error::Result;
use crate::store::TaskStore;
use crate::task::Status;

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error if `status` is unknown or the directory cannot be read.
pub fn run(store: &TaskStore<'_>, status: &str) -> Result<()> {
    let status: Status = status.parse()?;
    let tasks = store.list_tasks(status)?;
    print!("{}", render(status, &tasks));
    Ok(())
}

fn render(status: Status, tasks: &[String]) -> String {
    if tasks.is_empty() {
        return format!("No tasks in {status}\n");
    }
    let mut out = format!("\n{} Tasks:\n", status.as_str().to_uppercase());
    for task in tasks {
        out.push_str("  - ");
        out.push_str(task);
        out.push('\n');
    }
    out
}
