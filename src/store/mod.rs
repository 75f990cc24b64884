//! Task store: locates and reads task files under the status directories.
//!
//! All I/O goes through the `FileSystem` port. Directory layout:
//!
//! ```text
//! <specs>/
//!   ├── tasks/
//!   │     ├── backlog/
//!   │     ├── in-progress/
//!   │     └── completed/
//!   └── context/
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::task::{Status, Task, TaskId};

/// Read access to the task files of one project.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
    specs_dir: PathBuf,
}

impl<'a> TaskStore<'a> {
    /// Creates a store rooted at the project's `specs/` directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, specs_dir: &Path) -> Self {
        Self { ctx, specs_dir: specs_dir.to_path_buf() }
    }

    /// The service context this store performs I/O through.
    #[must_use]
    pub fn context(&self) -> &'a ServiceContext {
        self.ctx
    }

    /// Directory holding the task files for `status`.
    #[must_use]
    pub fn status_dir(&self, status: Status) -> PathBuf {
        self.specs_dir.join("tasks").join(status.as_str())
    }

    /// Lists the task filenames with the given status, sorted.
    ///
    /// A missing status directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing status directory cannot be read.
    pub fn list_tasks(&self, status: Status) -> Result<Vec<String>> {
        let dir = self.status_dir(status);
        if !self.ctx.fs.exists(&dir) {
            debug!(status = %status, dir = %dir.display(), "status directory missing");
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = self
            .ctx
            .fs
            .list_dir(&dir)
            .map_err(|e| Error::fs("list", &dir, e))?
            .into_iter()
            .filter(|name| TaskId::from_file_name(name).is_some())
            .collect();
        names.sort();
        debug!(status = %status, count = names.len(), "listed tasks");
        Ok(names)
    }

    /// Finds a task by its exact ID, searching backlog, in-progress, then completed.
    ///
    /// The first match wins; duplicates in later directories are not reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no status directory holds the task, or an
    /// I/O error if a directory or the task file cannot be read.
    pub fn find_task(&self, id: &str) -> Result<Task> {
        for status in Status::ALL {
            let found = self.list_tasks(status)?.into_iter().find_map(|name| {
                TaskId::from_file_name(&name)
                    .filter(|candidate| *candidate == *id)
                    .map(|task_id| (name, task_id))
            });
            let Some((name, task_id)) = found else {
                continue;
            };
            let path = self.status_dir(status).join(&name);
            let content =
                self.ctx.fs.read_to_string(&path).map_err(|e| Error::fs("read", &path, e))?;
            debug!(id, status = %status, file = %name, "found task");
            return Ok(Task { id: task_id, status, path, content });
        }
        Err(Error::NotFound(id.to_string()))
    }

    /// Loads a specification document relative to the `specs/` directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SpecNotFound`] if the document does not exist, or an
    /// I/O error if it cannot be read.
    pub fn load_specification(&self, relative: &str) -> Result<String> {
        let path = self.specs_dir.join(relative);
        if !self.ctx.fs.exists(&path) {
            return Err(Error::SpecNotFound(path));
        }
        self.ctx.fs.read_to_string(&path).map_err(|e| Error::fs("read", &path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context_with, MemFs};

    const ROOT: &str = "/project/specs";

    fn store_files() -> MemFs {
        MemFs::with_files(&[
            ("/project/specs/tasks/backlog/TASK-002-second.md", "Priority: P1\n"),
            ("/project/specs/tasks/backlog/TASK-001-first.md", "# First\n"),
            ("/project/specs/tasks/backlog/notes.md", "not a task"),
            ("/project/specs/tasks/in-progress/TASK-10-ten.md", "# Ten\n"),
            ("/project/specs/tasks/completed/TASK-003-done.md", "# Done\n"),
            ("/project/specs/context/architecture.md", "# Architecture\n"),
        ])
    }

    #[test]
    fn list_tasks_sorts_and_filters() {
        let ctx = context_with(store_files());
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        let names = store.list_tasks(Status::Backlog).unwrap();
        assert_eq!(names, vec!["TASK-001-first.md", "TASK-002-second.md"]);
    }

    #[test]
    fn list_tasks_missing_directory_is_empty() {
        let ctx = context_with(MemFs::default());
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        for status in Status::ALL {
            assert!(store.list_tasks(status).unwrap().is_empty());
        }
    }

    #[test]
    fn find_task_reads_content_and_status() {
        let ctx = context_with(store_files());
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        let task = store.find_task("TASK-003").unwrap();
        assert_eq!(task.id.as_str(), "TASK-003");
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.content, "# Done\n");
        assert_eq!(task.path, PathBuf::from("/project/specs/tasks/completed/TASK-003-done.md"));
    }

    #[test]
    fn find_task_matches_exact_token() {
        let ctx = context_with(store_files());
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        assert!(matches!(store.find_task("TASK-1"), Err(Error::NotFound(_))));
        assert_eq!(store.find_task("TASK-10").unwrap().status, Status::InProgress);
    }

    #[test]
    fn find_task_prefers_earlier_status() {
        let fs = MemFs::with_files(&[
            ("/project/specs/tasks/completed/TASK-005-old.md", "completed copy"),
            ("/project/specs/tasks/backlog/TASK-005-new.md", "backlog copy"),
        ]);
        let ctx = context_with(fs);
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        let task = store.find_task("TASK-005").unwrap();
        assert_eq!(task.status, Status::Backlog);
        assert_eq!(task.content, "backlog copy");
    }

    #[test]
    fn find_task_not_found() {
        let ctx = context_with(store_files());
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        let err = store.find_task("TASK-999").unwrap_err();
        assert_eq!(err.to_string(), "Task not found: TASK-999");
    }

    #[test]
    fn load_specification_reads_document() {
        let ctx = context_with(store_files());
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        let content = store.load_specification("context/architecture.md").unwrap();
        assert_eq!(content, "# Architecture\n");
    }

    #[test]
    fn load_specification_missing_document() {
        let ctx = context_with(store_files());
        let store = TaskStore::new(&ctx, Path::new(ROOT));

        let err = store.load_specification("context/missing.md").unwrap_err();
        assert!(matches!(err, Error::SpecNotFound(_)));
    }
}
