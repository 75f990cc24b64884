//! Task identifiers derived from filenames.

use std::fmt;

use serde::Serialize;

/// Prefix every task filename starts with.
pub const TASK_PREFIX: &str = "TASK-";

/// Extension every task filename ends with.
pub const TASK_EXTENSION: &str = ".md";

/// Identifier token of a task, e.g. `TASK-007`.
///
/// Parsed from filenames of the form `TASK-<token>[-<slug>].md`. The token is
/// the run of characters after `TASK-` up to the next `-`, so `TASK-1` and
/// `TASK-10` never collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Extracts the task ID from a filename, if it follows the convention.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(TASK_EXTENSION)?;
        let rest = stem.strip_prefix(TASK_PREFIX)?;
        let token = rest.split('-').next()?;
        if token.is_empty() {
            return None;
        }
        Some(Self(format!("{TASK_PREFIX}{token}")))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TaskId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_with_slug() {
        let id = TaskId::from_file_name("TASK-001-short-name.md").unwrap();
        assert_eq!(id.as_str(), "TASK-001");
    }

    #[test]
    fn parses_id_without_slug() {
        let id = TaskId::from_file_name("TASK-42.md").unwrap();
        assert_eq!(id.as_str(), "TASK-42");
    }

    #[test]
    fn shorter_id_is_not_a_prefix_match() {
        let id = TaskId::from_file_name("TASK-10-bigger.md").unwrap();
        assert!(id != *"TASK-1");
        assert!(id == *"TASK-10");
    }

    #[test]
    fn rejects_names_outside_convention() {
        assert!(TaskId::from_file_name("README.md").is_none());
        assert!(TaskId::from_file_name("TASK-001-notes.txt").is_none());
        assert!(TaskId::from_file_name("TASK-.md").is_none());
        assert!(TaskId::from_file_name("TASK--slug.md").is_none());
    }
}
