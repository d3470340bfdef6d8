//! Module augmentation for existing generated projects.
//!
//! Narrower than full generation: renders exactly four artifacts (route,
//! service, persistence model, schema) into an existing tree and touches
//! nothing else. Unlike [`crate::generate::ProjectGenerator`] there is NO
//! transactional rollback — this is a deliberate asymmetry, not an
//! oversight: a failure partway through leaves the files already written,
//! and re-running overwrites existing module files unconditionally (unsafe
//! if the user hand-edited them).

use std::path::{Path, PathBuf};

use apiforge_core::types::ModuleSpec;
use apiforge_templates::{render, RenderContext};

use crate::engine::Engine;
use crate::error::{io_err, EngineError};

/// Template names for the four generated artifacts.
const ROUTE_TEMPLATE: &str = "api_module";
const SERVICE_TEMPLATE: &str = "service_module";
const MODEL_TEMPLATE: &str = "model_module";
const SCHEMA_TEMPLATE: &str = "schema_module";

/// Adds one feature module to an existing generated project.
pub struct ModuleAugmentor<'a> {
    engine: &'a Engine,
}

impl<'a> ModuleAugmentor<'a> {
    pub fn new(engine: &'a Engine) -> Self {
        ModuleAugmentor { engine }
    }

    /// Write the module's four artifacts under `project_root`.
    ///
    /// Returns the written paths in write order. Fails with
    /// [`EngineError::InvalidProject`] before anything is written if
    /// `project_root` lacks the `app/` subtree.
    pub fn augment(
        &self,
        spec: &ModuleSpec,
        project_root: &Path,
    ) -> Result<Vec<PathBuf>, EngineError> {
        log::info!(
            "adding module '{}' (version {}) to {}",
            spec.name,
            spec.version,
            project_root.display()
        );

        let app = project_root.join("app");
        if !app.is_dir() {
            return Err(EngineError::InvalidProject {
                path: project_root.to_path_buf(),
            });
        }

        let ctx = RenderContext::for_module(spec);
        let module_file = format!("{}.py", spec.name);

        // Idempotent: the versioned API directory may or may not exist yet.
        let api_dir = app.join("api").join(&spec.version.0);
        std::fs::create_dir_all(&api_dir).map_err(|e| io_err(&api_dir, e))?;

        let artifacts = [
            (ROUTE_TEMPLATE, api_dir.join(&module_file)),
            (SERVICE_TEMPLATE, app.join("services").join(&module_file)),
            (MODEL_TEMPLATE, app.join("models").join(&module_file)),
            (SCHEMA_TEMPLATE, app.join("schemas").join(&module_file)),
        ];

        let mut written = Vec::with_capacity(artifacts.len());
        for (template, path) in artifacts {
            let text = self.engine.store().get(template)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
            }
            std::fs::write(&path, render(text, &ctx)).map_err(|e| io_err(&path, e))?;
            log::debug!("wrote {}", path.display());
            written.push(path);
        }

        log::info!("module '{}' added", spec.name);
        Ok(written)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use apiforge_core::types::{ApiVersion, ModuleName};

    use crate::engine::EngineOptions;

    use super::*;

    fn spec(name: &str, version: &str) -> ModuleSpec {
        ModuleSpec {
            name: ModuleName::from(name),
            version: ApiVersion::from(version),
        }
    }

    fn engine() -> Engine {
        Engine::new(EngineOptions::default()).expect("engine")
    }

    fn scaffold_minimal_project(root: &Path) {
        for dir in ["app/api", "app/services", "app/models", "app/schemas"] {
            fs::create_dir_all(root.join(dir)).expect("mkdir");
        }
    }

    #[test]
    fn missing_app_subtree_is_invalid_project() {
        let tmp = TempDir::new().expect("tempdir");
        let engine = engine();
        let err = ModuleAugmentor::new(&engine)
            .augment(&spec("order", "v1"), tmp.path())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidProject { .. }), "got: {err}");
        // Nothing may be written before the precondition check.
        assert_eq!(fs::read_dir(tmp.path()).expect("read_dir").count(), 0);
    }

    #[test]
    fn writes_exactly_four_artifacts() {
        let tmp = TempDir::new().expect("tempdir");
        scaffold_minimal_project(tmp.path());
        let engine = engine();
        let written = ModuleAugmentor::new(&engine)
            .augment(&spec("order", "v1"), tmp.path())
            .expect("augment");
        assert_eq!(written.len(), 4);
        assert!(tmp.path().join("app/api/v1/order.py").is_file());
        assert!(tmp.path().join("app/services/order.py").is_file());
        assert!(tmp.path().join("app/models/order.py").is_file());
        assert!(tmp.path().join("app/schemas/order.py").is_file());
    }

    #[test]
    fn rendered_artifacts_use_pascal_case() {
        let tmp = TempDir::new().expect("tempdir");
        scaffold_minimal_project(tmp.path());
        let engine = engine();
        ModuleAugmentor::new(&engine)
            .augment(&spec("order_item", "v1"), tmp.path())
            .expect("augment");
        let schema = fs::read_to_string(tmp.path().join("app/schemas/order_item.py")).unwrap();
        assert!(schema.contains("class OrderItemCreate"), "got:\n{schema}");
        assert!(!schema.contains("${ModuleName}"));
    }

    #[test]
    fn creates_missing_version_directory() {
        let tmp = TempDir::new().expect("tempdir");
        scaffold_minimal_project(tmp.path());
        let engine = engine();
        ModuleAugmentor::new(&engine)
            .augment(&spec("order", "v2"), tmp.path())
            .expect("augment");
        assert!(tmp.path().join("app/api/v2/order.py").is_file());
    }

    #[test]
    fn rerun_overwrites_to_identical_content() {
        let tmp = TempDir::new().expect("tempdir");
        scaffold_minimal_project(tmp.path());
        let engine = engine();
        let augmentor = ModuleAugmentor::new(&engine);
        augmentor.augment(&spec("order", "v1"), tmp.path()).expect("first");
        let route = tmp.path().join("app/api/v1/order.py");
        fs::write(&route, "# hand edit\n").expect("edit");
        augmentor.augment(&spec("order", "v1"), tmp.path()).expect("second");
        let after = fs::read_to_string(&route).unwrap();
        assert!(!after.contains("hand edit"), "augment overwrites unconditionally");
    }
}
