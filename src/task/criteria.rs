//! Acceptance-criteria extraction.
//!
//! A single pass over the document drives a three-state machine:
//!
//! ```text
//! Seeking --(line contains "Acceptance Criteria")--> Inside
//! Inside  --(non-blank line not starting with '-')--> Closed
//! ```
//!
//! While `Inside`, lines whose trimmed form starts with `- [ ]` are captured.
//! Blank lines and other dash items keep the block open. `Closed` is terminal,
//! so a second "Acceptance Criteria" heading does not start another block.

/// Heading text that opens the criteria block.
pub const CRITERIA_HEADING: &str = "Acceptance Criteria";

/// Unchecked checklist marker.
pub const UNCHECKED_MARKER: &str = "- [ ]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Seeking,
    Inside,
    Closed,
}

impl BlockState {
    /// Advances on one line, returning the next state and any captured criterion.
    fn step(self, line: &str) -> (Self, Option<String>) {
        match self {
            Self::Seeking if line.contains(CRITERIA_HEADING) => (Self::Inside, None),
            Self::Seeking | Self::Closed => (self, None),
            Self::Inside => {
                let trimmed = line.trim();
                if let Some(rest) = trimmed.strip_prefix(UNCHECKED_MARKER) {
                    (Self::Inside, Some(rest.trim().to_string()))
                } else if trimmed.is_empty() || trimmed.starts_with('-') {
                    (Self::Inside, None)
                } else {
                    (Self::Closed, None)
                }
            }
        }
    }
}

/// Extracts the unchecked acceptance criteria, in document order.
#[must_use]
pub fn parse_acceptance_criteria(content: &str) -> Vec<String> {
    let mut state = BlockState::Seeking;
    let mut criteria = Vec::new();
    for line in content.lines() {
        let (next, captured) = state.step(line);
        criteria.extend(captured);
        state = next;
        if state == BlockState::Closed {
            break;
        }
    }
    criteria
}
