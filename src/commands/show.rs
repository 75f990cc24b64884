//! `spec-manager show` command.

use crate::error::Result;
use crate::store::TaskStore;
use crate::task::Task;

/// Execute the `show` command.
///
/// # Errors
///
/// Returns an error if the task cannot be found or read.
pub fn run(store: &TaskStore<'_>, task_id: &str) -> Result<()> {
    let task = store.find_task(task_id)?;
    println!("{}", render(&task));
    Ok(())
}

fn render(task: &Task) -> String {
    let mut out = format!(
        "\nTask: {}\nStatus: {}\nPriority: {}\n",
        task.id,
        task.status,
        task.priority()
    );
    if let Some(deps) = task.dependencies() {
        out.push_str(&format!("Dependencies: {deps}\n"));
    }
    out.push_str("\n--- Task Content ---\n");
    out.push_str(&task.content);
    out
}
