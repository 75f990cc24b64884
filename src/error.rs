//! Error types for spec-manager.
//!
//! Every library operation returns [`Error`]; the binary catches it once,
//! prints `Error: <message>`, and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while managing task files.
#[derive(Error, Debug)]
pub enum Error {
    /// No status directory contains a file for the task ID.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// A status value outside `backlog`, `in-progress`, `completed`.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// A specification document does not exist under `specs/`.
    #[error("Specification not found: {}", .0.display())]
    SpecNotFound(PathBuf),

    /// A filesystem operation on a specific path failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Fs {
        /// What was being attempted (e.g. "read", "move").
        action: &'static str,
        /// The path the operation targeted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Command-line arguments were rejected.
    #[error(transparent)]
    Usage(clap::Error),
}

impl Error {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Fs { action, path: path.into(), source }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
