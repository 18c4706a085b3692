//! Error types for hyperhash-publish.

use std::path::PathBuf;

use thiserror::Error;

use hyperhash_renderer::RenderError;

/// All errors that can arise from publishing a rendered post.
#[derive(Debug, Error)]
pub enum PublishError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The topic produced an empty slug, so no sensible file name exists.
    #[error("topic {topic:?} produces an empty slug; nothing to name the file after")]
    EmptySlug { topic: String },

    /// The target file exists with different content and `--force` was not given.
    #[error("{path} already exists with different content; pass --force to overwrite")]
    TargetExists { path: PathBuf },
}

/// Convenience constructor for [`PublishError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PublishError {
    PublishError::Io {
        path: path.into(),
        source,
    }
}
