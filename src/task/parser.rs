//! Field extraction from freeform task markdown.

use super::priority::Priority;

/// Marker introducing a dependency line.
pub const DEPENDS_ON_MARKER: &str = "Depends on:";

/// Resolves a task's priority from its content.
///
/// This is a containment check over the whole document, not a per-line parse:
/// `Priority: P0` wins over `Priority: P1`, which wins over `Priority: P2`,
/// wherever they appear. Without any marker the task is [`Priority::P3`].
#[must_use]
pub fn parse_priority(content: &str) -> Priority {
    Priority::MARKED
        .into_iter()
        .find(|priority| content.contains(&priority.marker()))
        .unwrap_or_default()
}

/// Returns the dependency text from the first `Depends on:` line.
///
/// The line is split on the first occurrence of the marker and the remainder
/// trimmed. Later `Depends on:` lines are ignored.
#[must_use]
pub fn parse_dependencies(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.split_once(DEPENDS_ON_MARKER))
        .map(|(_, rest)| rest.trim().to_string())
}
