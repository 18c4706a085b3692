//! Error types for hyperhash-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from topic catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse topic catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.hyperhash/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The catalog contains no topics to pick from.
    #[error("topic catalog at {path} is empty")]
    EmptyCatalog { path: PathBuf },
}
