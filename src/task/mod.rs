//! Task model: identifiers, statuses, priorities, and parsed fields.

mod criteria;
mod id;
mod parser;
mod priority;
mod status;

use std::path::PathBuf;

pub use criteria::{parse_acceptance_criteria, CRITERIA_HEADING, UNCHECKED_MARKER};
pub use id::{TaskId, TASK_EXTENSION, TASK_PREFIX};
pub use parser::{parse_dependencies, parse_priority, DEPENDS_ON_MARKER};
pub use priority::Priority;
pub use status::Status;

/// A task file located in one of the status directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Identifier parsed from the filename.
    pub id: TaskId,
    /// Status implied by the containing directory.
    pub status: Status,
    /// Path to the backing markdown file.
    pub path: PathBuf,
    /// Raw file content.
    pub content: String,
}

impl Task {
    /// Filename of the backing file.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// Priority derived from the content.
    #[must_use]
    pub fn priority(&self) -> Priority {
        parse_priority(&self.content)
    }

    /// Dependency text derived from the content, if any.
    #[must_use]
    pub fn dependencies(&self) -> Option<String> {
        parse_dependencies(&self.content)
    }

    /// Unchecked acceptance criteria derived from the content.
    #[must_use]
    pub fn acceptance_criteria(&self) -> Vec<String> {
        parse_acceptance_criteria(&self.content)
    }
}
