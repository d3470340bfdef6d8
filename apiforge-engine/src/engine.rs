//! The engine application context.
//!
//! Everything a generation or augmentation run depends on — template
//! catalog, mapping table, directory spec, plan, tooling probe — lives in
//! one [`Engine`] value constructed at process start and passed by
//! reference into the orchestrator and augmentor. There is no ambient
//! global state; the catalog is read-only after load and may be shared
//! across any number of runs in the same process.

use std::path::PathBuf;

use apiforge_templates::TemplateStore;

use crate::error::EngineError;
use crate::generate::{GenerationPlan, ToolingProbe, UvProbe};
use crate::mapping::OutputMappingTable;
use crate::structure::DirectorySpec;

/// Construction options for [`Engine::new`].
#[derive(Debug, Default)]
pub struct EngineOptions {
    /// Directory whose files override embedded templates of the same name.
    pub template_dir: Option<PathBuf>,
}

/// Explicit application context for the generation engine.
pub struct Engine {
    store: TemplateStore,
    mappings: OutputMappingTable,
    structure: DirectorySpec,
    plan: GenerationPlan,
    probe: Box<dyn ToolingProbe>,
}

impl Engine {
    /// Build the shipped engine: embedded catalog (plus overrides), shipped
    /// mapping table, shipped directory spec and plan, `uv` tooling probe.
    pub fn new(options: EngineOptions) -> Result<Self, EngineError> {
        let store = TemplateStore::new(options.template_dir.as_deref())?;
        log::debug!("engine built with {} template(s)", store.len());
        Ok(Engine {
            store,
            mappings: OutputMappingTable::shipped(),
            structure: DirectorySpec::default(),
            plan: GenerationPlan::shipped(),
            probe: Box::new(UvProbe),
        })
    }

    /// Assemble an engine from explicit parts. The engine is
    /// catalog-agnostic; this is the entry point for custom catalogs,
    /// mapping tables and plans.
    pub fn from_parts(
        store: TemplateStore,
        mappings: OutputMappingTable,
        structure: DirectorySpec,
        plan: GenerationPlan,
        probe: Box<dyn ToolingProbe>,
    ) -> Self {
        Engine {
            store,
            mappings,
            structure,
            plan,
            probe,
        }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn mappings(&self) -> &OutputMappingTable {
        &self.mappings
    }

    pub fn structure(&self) -> &DirectorySpec {
        &self.structure
    }

    pub fn plan(&self) -> &GenerationPlan {
        &self.plan
    }

    pub fn probe(&self) -> &dyn ToolingProbe {
        self.probe.as_ref()
    }

    /// End the engine lifecycle, releasing the catalog.
    pub fn shutdown(self) {
        log::debug!("engine shut down");
    }
}

#[cfg(test)]
mod tests {
    use crate::generate::FixedProbe;

    use super::*;

    #[test]
    fn new_engine_carries_shipped_parts() {
        let engine = Engine::new(EngineOptions::default()).expect("engine");
        assert!(engine.store().has("main"));
        assert!(!engine.mappings().is_empty());
        assert!(!engine.plan().batches().is_empty());
        engine.shutdown();
    }

    #[test]
    fn from_parts_uses_given_probe() {
        let engine = Engine::from_parts(
            TemplateStore::builtin(),
            OutputMappingTable::shipped(),
            DirectorySpec::default(),
            GenerationPlan::shipped(),
            Box::new(FixedProbe(false)),
        );
        assert!(!engine.probe().available());
    }
}
