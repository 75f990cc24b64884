//! Configuration for spec-manager.
//!
//! The project root is resolved once, at startup, from (in order) the
//! `--root` flag, the `SPEC_MANAGER_ROOT` environment variable (a `.env` file
//! is honoured), and the current directory. An optional YAML file refines the
//! layout:
//!
//! ```yaml
//! specs_dir: docs/specs
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the project root.
pub const ROOT_ENV: &str = "SPEC_MANAGER_ROOT";

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE: &str = ".spec-manager.yaml";

/// Errors that can occur while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The current directory could not be determined.
    #[error("failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`Config`].
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Resolved project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Directory the `specs/` tree lives under.
    #[serde(skip)]
    pub project_root: PathBuf,

    /// Location of the specs tree, relative to the project root.
    #[serde(default = "default_specs_dir")]
    pub specs_dir: PathBuf,
}

fn default_specs_dir() -> PathBuf {
    PathBuf::from("specs")
}

impl Config {
    /// Creates a default configuration for `project_root`.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into(), specs_dir: default_specs_dir() }
    }

    /// Resolves configuration from flags, environment, and the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is needed but unavailable, or
    /// if a config file exists but cannot be read or parsed.
    pub fn load(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();

        let root = match root {
            Some(root) => root.to_path_buf(),
            None => match std::env::var_os(ROOT_ENV) {
                Some(root) => PathBuf::from(root),
                None => std::env::current_dir().map_err(ConfigError::CurrentDir)?,
            },
        };
        Self::from_root(root, config_path)
    }

    /// Builds configuration for an explicit root, reading the config file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed. An explicit
    /// `config_path` must exist; the default file is optional.
    pub fn from_root(root: PathBuf, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(root.join(CONFIG_FILE)).filter(|path| path.is_file()),
        };

        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
                let config: Config = serde_yaml::from_str(&content)
                    .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
                debug!(path = %path.display(), "loaded config file");
                config
            }
            None => Config::new(PathBuf::new()),
        };
        config.project_root = root;
        debug!(
            root = %config.project_root.display(),
            specs = %config.specs_path().display(),
            "resolved config"
        );
        Ok(config)
    }

    /// Absolute location of the specs tree.
    #[must_use]
    pub fn specs_path(&self) -> PathBuf {
        self.project_root.join(&self.specs_dir)
    }

    /// Location of the task status directories.
    #[must_use]
    pub fn tasks_path(&self) -> PathBuf {
        self.specs_path().join("tasks")
    }
}
