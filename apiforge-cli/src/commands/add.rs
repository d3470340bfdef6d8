//! `apiforge add <module>` — add a feature module to an existing project.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use apiforge_core::{
    types::{ApiVersion, ModuleName, ModuleSpec},
    validate, NameKind,
};
use apiforge_engine::{Engine, EngineOptions, ModuleAugmentor};

/// Arguments for `apiforge add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name of the module to add.
    pub module_name: String,

    /// Path to the generated project root.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Target API version namespace (v1, v2, ...).
    #[arg(long, default_value = "v1")]
    pub version: String,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let name = validate::validate_name(&self.module_name, NameKind::Module)
            .context("validation failed")?;
        let version = validate::validate_version(&self.version).context("validation failed")?;

        let spec = ModuleSpec {
            name: ModuleName::from(name.clone()),
            version: ApiVersion(version),
        };

        let engine = Engine::new(EngineOptions::default())?;
        let written = ModuleAugmentor::new(&engine)
            .augment(&spec, &self.path)
            .with_context(|| format!("failed to add module '{name}'"))?;
        engine.shutdown();

        println!(
            "{} Module '{}' added ({} files)",
            "✓".green(),
            name,
            written.len()
        );
        for path in &written {
            println!("  ✎  {}", path.display());
        }
        Ok(())
    }
}
