//! Implementation prompt for an AI coding agent.

use crate::task::Task;

/// Context documents the agent is told to read, as `(label, path)`.
pub const CONTEXT_FILES: [(&str, &str); 4] = [
    ("Architecture", "specs/context/architecture.md"),
    ("Constraints", "specs/context/constraints.md"),
    ("Style Guide", "specs/context/style-guide.md"),
    ("Domain Glossary", "specs/context/domain-glossary.md"),
];

const INSTRUCTIONS: [&str; 5] = [
    "Follow the technical approach exactly as specified",
    "Write tests first (TDD approach)",
    "Include comprehensive error handling",
    "Follow the style guide for all code",
    "Update documentation as needed",
];

const VALIDATION_REQUIREMENTS: [&str; 4] = [
    "All acceptance criteria must be met",
    "Tests must pass with >80% coverage",
    "TypeScript must compile without errors",
    "ESLint must pass without warnings",
];

/// Renders the implementation prompt for `task`.
#[must_use]
pub fn implementation_prompt(task: &Task) -> String {
    let context_files =
        numbered(CONTEXT_FILES.iter().map(|(label, path)| format!("{label}: {path}")));
    let instructions = numbered(INSTRUCTIONS.iter().map(ToString::to_string));
    let requirements: String =
        VALIDATION_REQUIREMENTS.iter().map(|line| format!("- {line}\n")).collect();

    format!(
        "
# Implementation Task: {id}

## Task Specification
{content}

## Context Files to Read
{context_files}
## Implementation Instructions
{instructions}
## Validation Requirements
{requirements}
Please implement this task following the specification exactly.
",
        id = task.id,
        content = task.content,
    )
}

fn numbered(lines: impl Iterator<Item = String>) -> String {
    lines.enumerate().map(|(i, line)| format!("{}. {line}\n", i + 1)).collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::task::{Status, TaskId};

    fn task() -> Task {
        Task {
            id: TaskId::from_file_name("TASK-007-foo.md").unwrap(),
            status: Status::Backlog,
            path: PathBuf::from("/p/specs/tasks/backlog/TASK-007-foo.md"),
            content: "## Acceptance Criteria\n- [ ] Do X\n".to_string(),
        }
    }

    #[test]
    fn embeds_id_and_content() {
        let prompt = implementation_prompt(&task());
        assert!(prompt.contains("# Implementation Task: TASK-007\n"));
        assert!(prompt.contains("## Task Specification\n## Acceptance Criteria\n- [ ] Do X\n"));
    }

    #[test]
    fn lists_context_files_in_order() {
        let prompt = implementation_prompt(&task());
        assert!(prompt.contains(
            "1. Architecture: specs/context/architecture.md\n\
             2. Constraints: specs/context/constraints.md\n\
             3. Style Guide: specs/context/style-guide.md\n\
             4. Domain Glossary: specs/context/domain-glossary.md\n"
        ));
    }

    #[test]
    fn ends_with_static_checklists() {
        let prompt = implementation_prompt(&task());
        assert!(prompt.contains("2. Write tests first (TDD approach)\n"));
        assert!(prompt.contains("- All acceptance criteria must be met\n"));
        assert!(prompt.trim_end().ends_with("following the specification exactly."));
    }
}
