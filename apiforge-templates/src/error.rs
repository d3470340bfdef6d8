//! Error types for apiforge-templates.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from catalog and rendering operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The catalog has no entry under the requested (canonical) name.
    /// A missing template is a configuration bug, fatal for the run —
    /// callers must not substitute empty content.
    #[error("template '{name}' not found; available: {available}")]
    NotFound { name: String, available: String },

    /// Filesystem error while loading override templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error (environment config documents).
    #[error("config serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience constructor for [`TemplateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> TemplateError {
    TemplateError::Io {
        path: path.into(),
        source,
    }
}
