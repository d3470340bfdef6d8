//! Error types for apiforge-engine.

use std::path::PathBuf;

use thiserror::Error;

use apiforge_templates::TemplateError;

use crate::generate::Phase;

/// All errors that can arise from generation and augmentation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The target project root already exists. Not retried.
    #[error("target directory already exists: {path}")]
    Conflict { path: PathBuf },

    /// The augment target is not a generated project (no `app/` subtree).
    /// Nothing has been written when this is raised.
    #[error("not a generated project (missing app/ subtree): {path}")]
    InvalidProject { path: PathBuf },

    /// A catalog or rendering error, including the fatal
    /// [`TemplateError::NotFound`].
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A phase of orchestrated generation failed. Raised after the
    /// compensating rollback has run; always carries the original cause.
    #[error("project generation failed during {phase} phase: {source}")]
    Generation {
        phase: Phase,
        #[source]
        source: Box<EngineError>,
    },
}

/// Convenience constructor for [`EngineError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> EngineError {
    EngineError::Io {
        path: path.into(),
        source,
    }
}
