//! Progress report across all status directories.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::ports::Clock;
use crate::store::TaskStore;
use crate::task::Status;

/// How many backlog entries the report previews.
pub const BACKLOG_PREVIEW: usize = 5;

/// How many completed entries the report shows, from the end of the list.
pub const RECENT_COMPLETED: usize = 5;

/// Snapshot of task counts and filenames per status.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
    /// Backlog filenames, sorted.
    pub backlog: Vec<String>,
    /// In-progress filenames, sorted.
    pub in_progress: Vec<String>,
    /// Completed filenames, sorted.
    pub completed: Vec<String>,
}

impl ProgressReport {
    /// Scans every status directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing status directory cannot be read.
    pub fn collect(store: &TaskStore<'_>, clock: &dyn Clock) -> Result<Self> {
        Ok(Self {
            generated_at: clock.now(),
            backlog: store.list_tasks(Status::Backlog)?,
            in_progress: store.list_tasks(Status::InProgress)?,
            completed: store.list_tasks(Status::Completed)?,
        })
    }

    /// Number of tasks across all statuses.
    #[must_use]
    pub fn total(&self) -> usize {
        self.backlog.len() + self.in_progress.len() + self.completed.len()
    }

    /// Share of completed tasks as a percentage; `0.0` when there are no tasks.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.completed.len() as f64 / total as f64 * 100.0
    }

    /// Renders the report as markdown.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("# Task Progress Report\n\n");
        let _ = writeln!(out, "Generated: {} UTC\n", self.generated_at.format("%Y-%m-%d %H:%M:%S"));

        out.push_str("## Summary\n");
        for (status, tasks) in [
            (Status::Backlog, &self.backlog),
            (Status::InProgress, &self.in_progress),
            (Status::Completed, &self.completed),
        ] {
            let _ = writeln!(out, "- {}: {} tasks", status.label(), tasks.len());
        }
        let _ = writeln!(out, "- Total: {} tasks\n", self.total());
        let _ = writeln!(out, "**Completion: {:.1}%**\n", self.completion_percent());

        if !self.in_progress.is_empty() {
            out.push_str("## In Progress\n");
            for task in &self.in_progress {
                let _ = writeln!(out, "- {task}");
            }
            out.push('\n');
        }

        if !self.backlog.is_empty() {
            out.push_str("## Backlog (Next Up)\n");
            for task in self.backlog.iter().take(BACKLOG_PREVIEW) {
                let _ = writeln!(out, "- {task}");
            }
            if self.backlog.len() > BACKLOG_PREVIEW {
                let _ = writeln!(out, "- ...and {} more", self.backlog.len() - BACKLOG_PREVIEW);
            }
            out.push('\n');
        }

        if !self.completed.is_empty() {
            out.push_str("## Recently Completed\n");
            let skip = self.completed.len().saturating_sub(RECENT_COMPLETED);
            for task in &self.completed[skip..] {
                let _ = writeln!(out, "- ✅ {task}");
            }
            out.push('\n');
        }

        out
    }
}
