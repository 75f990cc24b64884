//! Status transitions: moving a task file between status directories.

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::task::{Status, Task, TaskId};

/// A completed move of one task file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The task that moved.
    pub id: TaskId,
    /// Status before the move.
    pub from: Status,
    /// Status after the move.
    pub to: Status,
    /// New location of the backing file.
    pub destination: PathBuf,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved {} from {} to {}", self.id, self.from, self.to)
    }
}

/// Moves `task` into the directory for `to`, keeping its filename.
///
/// The destination directory is created if needed. The source file does not
/// survive the move.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be moved.
pub fn move_task(store: &TaskStore<'_>, task: &Task, to: Status) -> Result<Transition> {
    let fs = &store.context().fs;
    let dir = store.status_dir(to);
    fs.create_dir_all(&dir).map_err(|e| Error::fs("create", &dir, e))?;

    let file_name = task.path.file_name().ok_or_else(|| Error::NotFound(task.id.to_string()))?;
    let destination = dir.join(file_name);
    fs.rename(&task.path, &destination).map_err(|e| Error::fs("move", &task.path, e))?;

    let transition = Transition { id: task.id.clone(), from: task.status, to, destination };
    info!(id = %transition.id, from = %transition.from, to = %transition.to, "task moved");
    Ok(transition)
}

/// Parses `status`, locates the task, and moves it.
///
/// # Errors
///
/// Returns [`Error::InvalidStatus`] before touching the filesystem when
/// `status` is not a known status, [`Error::NotFound`] when the task does not
/// exist, or an I/O error from the move.
pub fn update_status(store: &TaskStore<'_>, id: &str, status: &str) -> Result<Transition> {
    let to: Status = status.parse()?;
    let task = store.find_task(id)?;
    move_task(store, &task, to)
}
