//! Error types for atelier-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from state and project operations.
#[derive(Debug, Error)]
pub enum AtelierError {
    /// Underlying I/O failure (directory creation, stat, read-dir, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (state save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on state load — includes file path and line context.
    #[error("failed to parse state file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.atelier/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// No root directory has been configured yet.
    #[error("no root directory configured; run `atelier init` first")]
    NotInitialized,

    /// A project directory (or any other entry) already occupies the name.
    #[error("project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Project names are used verbatim as path segments; empty is invalid.
    #[error("project name cannot be empty")]
    EmptyName,

    /// A required prompt was cancelled before producing a value.
    #[error("{0} is required; the prompt was cancelled")]
    MissingInput(&'static str),
}
