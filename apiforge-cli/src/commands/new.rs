//! `apiforge new <name>` — generate a full project skeleton.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use apiforge_core::{
    types::{FeatureFlags, GenerationConfig, ProjectName},
    validate, NameKind,
};
use apiforge_engine::{Engine, EngineOptions, ProjectGenerator};

use super::super::DbKindArg;

/// Arguments for `apiforge new`.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the project to create.
    pub project_name: String,

    /// Database backend: sqlite | mysql | postgresql.
    #[arg(long, value_name = "KIND", default_value = "sqlite")]
    pub db: DbKindArg,

    /// Enable the Redis cache backend.
    #[arg(long)]
    pub redis: bool,

    /// Enable the Celery task-queue subtree.
    #[arg(long)]
    pub celery: bool,

    /// Directory the project root is created under.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl NewArgs {
    pub fn run(self) -> Result<()> {
        let name = validate::validate_name(&self.project_name, NameKind::Project)
            .context("validation failed")?;

        let config = GenerationConfig {
            project_name: ProjectName::from(name.clone()),
            db_kind: self.db.into(),
            flags: FeatureFlags {
                redis: self.redis,
                celery: self.celery,
            },
            output_dir: self.output_dir,
        };

        let engine = Engine::new(EngineOptions::default())?;
        let run = ProjectGenerator::new(&engine, config)
            .generate()
            .with_context(|| format!("failed to generate project '{name}'"))?;
        engine.shutdown();

        println!(
            "{} Project '{}' created at {}",
            "✓".green(),
            name,
            run.root.display()
        );
        println!("  Next steps:");
        println!("    cd {name}");
        println!("    uv venv && uv pip install -r requirements.txt");
        println!("    uv run python runserver.py");
        Ok(())
    }
}
