//! Declarative directory structure for generated projects.
//!
//! # Shipped layout
//!
//! ```text
//! <root>/
//!   app/api/default/       app/api/<version>/
//!   app/{initializer,middleware,models,schemas,services,utils,cache,core}/
//!   config/  docs/  logs/  tests/
//!   app_celery/            (celery flag only)
//! ```
//!
//! Every listed directory receives exactly one package-marker file, written
//! only if absent so a retried partial run never clobbers prior content.

use std::path::{Path, PathBuf};

use apiforge_core::types::FeatureFlags;

use crate::error::{io_err, EngineError};

/// Marker file placed in every generated directory.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Marker content: an empty module docstring.
pub const MARKER_CONTENT: &str = "\"\"\"\n\"\"\"\n";

/// Declarative tree: which subtrees always exist, which are flag-gated.
#[derive(Debug, Clone)]
pub struct DirectorySpec {
    /// Versioned API namespaces under `app/api/`.
    pub api_versions: Vec<String>,
    /// Whether `app/api/default/` is present.
    pub api_default: bool,
    /// Layer directories under `app/`.
    pub layers: Vec<String>,
    /// Top-level non-package directories (still marked, by convention).
    pub extras: Vec<String>,
    /// Subtree created only when the celery flag is set.
    pub task_queue_dir: Option<String>,
}

impl Default for DirectorySpec {
    fn default() -> Self {
        DirectorySpec {
            api_versions: vec!["v1".to_string()],
            api_default: true,
            layers: [
                "initializer",
                "middleware",
                "models",
                "schemas",
                "services",
                "utils",
                "cache",
                "core",
            ]
            .map(String::from)
            .to_vec(),
            extras: ["config", "docs", "logs", "tests"].map(String::from).to_vec(),
            task_queue_dir: Some("app_celery".to_string()),
        }
    }
}

impl DirectorySpec {
    /// Expand the spec into an ordered list of relative directory paths.
    ///
    /// Deterministic: the same flags always produce the same ordered list,
    /// so generation stays idempotent-by-inspection across runs.
    pub fn directories(&self, flags: &FeatureFlags) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        let api = Path::new("app").join("api");
        if self.api_default {
            dirs.push(api.join("default"));
        }
        for version in &self.api_versions {
            dirs.push(api.join(version));
        }
        for layer in &self.layers {
            dirs.push(Path::new("app").join(layer));
        }
        for extra in &self.extras {
            dirs.push(PathBuf::from(extra));
        }
        if flags.celery {
            if let Some(dir) = &self.task_queue_dir {
                dirs.push(PathBuf::from(dir));
            }
        }
        dirs
    }

    /// Create every directory under `root` (parents included, re-creation is
    /// not an error) and drop a package marker in each, if absent.
    pub fn build(&self, root: &Path, flags: &FeatureFlags) -> Result<(), EngineError> {
        for rel in self.directories(flags) {
            let dir = root.join(&rel);
            std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
            let marker = dir.join(PACKAGE_MARKER);
            if !marker.exists() {
                std::fs::write(&marker, MARKER_CONTENT).map_err(|e| io_err(&marker, e))?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
