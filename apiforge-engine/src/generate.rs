//! Orchestrated project generation.
//!
//! A run is a linear sequence of phases with no branching back:
//! root creation → directory structure → ordered template batches →
//! per-environment configs → (optional) tooling config. Any failure between
//! root creation and the last mandatory batch triggers the compensating
//! action — recursive deletion of the root this run created — and surfaces
//! as [`EngineError::Generation`] carrying the original cause.

use std::fmt;
use std::path::{Path, PathBuf};

use apiforge_core::types::GenerationConfig;
use apiforge_templates::{render, Env, EnvConfigBuilder, RenderContext};

use crate::engine::Engine;
use crate::error::{io_err, EngineError};
use crate::mapping::{fallback_target, Resolution};

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// The phases of one generation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    RootCreated,
    StructureBuilt,
    CoreFiles,
    InitializerFiles,
    MiddlewareFiles,
    UtilsFiles,
    CacheFiles,
    ApiFiles,
    LayerFiles,
    EnterpriseFiles,
    TaskQueueFiles,
    TestFiles,
    DocsFiles,
    MiscFiles,
    ToolingConfig,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::RootCreated => "root-creation",
            Phase::StructureBuilt => "structure",
            Phase::CoreFiles => "core-files",
            Phase::InitializerFiles => "initializer-files",
            Phase::MiddlewareFiles => "middleware-files",
            Phase::UtilsFiles => "utils-files",
            Phase::CacheFiles => "cache-files",
            Phase::ApiFiles => "api-files",
            Phase::LayerFiles => "layer-files",
            Phase::EnterpriseFiles => "enterprise-files",
            Phase::TaskQueueFiles => "task-queue-files",
            Phase::TestFiles => "test-files",
            Phase::DocsFiles => "docs-files",
            Phase::MiscFiles => "misc-files",
            Phase::ToolingConfig => "tooling-config",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Generation plan
// ---------------------------------------------------------------------------

/// One phase's ordered batch of template names.
#[derive(Debug, Clone)]
pub struct PhaseBatch {
    pub phase: Phase,
    pub templates: Vec<String>,
}

impl PhaseBatch {
    pub fn new(phase: Phase, templates: &[&str]) -> Self {
        PhaseBatch {
            phase,
            templates: templates.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// The ordered template batches a run executes. Plans are data so the
/// engine works for any catalog, not just the shipped one.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    batches: Vec<PhaseBatch>,
}

impl GenerationPlan {
    pub fn new(batches: Vec<PhaseBatch>) -> Self {
        GenerationPlan { batches }
    }

    pub fn batches(&self) -> &[PhaseBatch] {
        &self.batches
    }

    /// The plan shipped with the generator. Batch order is part of the
    /// generated-project contract.
    pub fn shipped() -> Self {
        GenerationPlan::new(vec![
            PhaseBatch::new(Phase::CoreFiles, &["main", "app_init"]),
            PhaseBatch::new(
                Phase::InitializerFiles,
                &[
                    "initializer_init",
                    "pydantic_settings_config",
                    "initializer_db",
                    "initializer_log",
                    "initializer_redis",
                    "initializer_snow",
                    "initializer_context",
                ],
            ),
            PhaseBatch::new(
                Phase::MiddlewareFiles,
                &[
                    "middleware_init",
                    "middleware_cors",
                    "middleware_exceptions",
                    "middleware_http",
                ],
            ),
            PhaseBatch::new(
                Phase::UtilsFiles,
                &["utils_jwt", "utils_db_async", "utils_api_key"],
            ),
            PhaseBatch::new(Phase::CacheFiles, &["cache_init", "cache_manager"]),
            PhaseBatch::new(
                Phase::ApiFiles,
                &[
                    "api_init",
                    "api_dependencies",
                    "api_exceptions",
                    "api_responses",
                    "api_status",
                    "api_ping",
                ],
            ),
            PhaseBatch::new(
                Phase::LayerFiles,
                &["models_init", "schemas_init", "services_init"],
            ),
            PhaseBatch::new(
                Phase::EnterpriseFiles,
                &[
                    "unified_router",
                    "exception_system",
                    "context_logging",
                    "logging_fastcrud",
                    "lifespan_manager",
                ],
            ),
            PhaseBatch::new(Phase::TaskQueueFiles, &["celery_app"]),
            PhaseBatch::new(
                Phase::TestFiles,
                &[
                    "conftest",
                    "test_example",
                    "pytest.ini",
                    "generate_code.js",
                    "package.json",
                ],
            ),
            PhaseBatch::new(
                Phase::DocsFiles,
                &["docs_api.md", "docs_development.md", "docs_deployment.md"],
            ),
            PhaseBatch::new(
                Phase::MiscFiles,
                &[
                    "requirements.txt",
                    "pyproject.toml",
                    "runserver",
                    "README.md",
                    "gitignore",
                    "dockerignore",
                    "Dockerfile",
                    "docker_compose.yaml",
                    "env_example",
                ],
            ),
        ])
    }
}

impl Default for GenerationPlan {
    fn default() -> Self {
        Self::shipped()
    }
}

// ---------------------------------------------------------------------------
// Tooling probe
// ---------------------------------------------------------------------------

/// Probe deciding whether the optional tooling config phase runs at all.
pub trait ToolingProbe {
    fn available(&self) -> bool;
}

#[cfg(windows)]
const UV_BINARY: &str = "uv.exe";
#[cfg(not(windows))]
const UV_BINARY: &str = "uv";

/// Default probe: looks for the `uv` binary on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UvProbe;

impl ToolingProbe for UvProbe {
    fn available(&self) -> bool {
        let Some(path) = std::env::var_os("PATH") else {
            return false;
        };
        std::env::split_paths(&path).any(|dir| dir.join(UV_BINARY).is_file())
    }
}

/// Probe with a fixed answer, for callers that already know.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl ToolingProbe for FixedProbe {
    fn available(&self) -> bool {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Generation run
// ---------------------------------------------------------------------------

/// Transient state of one orchestrator invocation.
#[derive(Debug)]
pub struct GenerationRun {
    /// Absolute or caller-relative path of the project root.
    pub root: PathBuf,
    /// True once this run created the root — the run then owns deletion
    /// rights for rollback. A pre-existing root is never deleted.
    pub created_root: bool,
    /// Phases completed so far, in order.
    pub completed: Vec<Phase>,
}

impl GenerationRun {
    fn new(root: PathBuf) -> Self {
        GenerationRun {
            root,
            created_root: false,
            completed: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Sequences one full project generation against an [`Engine`].
pub struct ProjectGenerator<'a> {
    engine: &'a Engine,
    config: GenerationConfig,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(engine: &'a Engine, config: GenerationConfig) -> Self {
        ProjectGenerator { engine, config }
    }

    /// Run all phases. On success returns the completed [`GenerationRun`];
    /// on failure the partially-created root has been rolled back.
    pub fn generate(&self) -> Result<GenerationRun, EngineError> {
        let root = self.config.project_path();
        log::info!(
            "generating project '{}' at {} (db: {}, redis: {}, celery: {})",
            self.config.project_name,
            root.display(),
            self.config.db_kind,
            self.config.flags.redis,
            self.config.flags.celery,
        );

        if root.exists() {
            return Err(EngineError::Conflict { path: root });
        }

        let ctx = RenderContext::base(&self.config);
        let mut run = GenerationRun::new(root);

        if let Err((phase, source)) = self.run_phases(&mut run, &ctx) {
            self.rollback(&run);
            return Err(EngineError::Generation {
                phase,
                source: Box::new(source),
            });
        }

        // Late, independently-gated phase. All mandatory phases are done, so
        // a failure here must not fail the run (and must not roll it back).
        if self.engine.probe().available() {
            match self.write_template(&run.root, "uv.toml", &ctx) {
                Ok(()) => run.completed.push(Phase::ToolingConfig),
                Err(e) => log::warn!("tooling config skipped: {e}"),
            }
        }

        log::info!("project '{}' generated", self.config.project_name);
        Ok(run)
    }

    fn run_phases(
        &self,
        run: &mut GenerationRun,
        ctx: &RenderContext,
    ) -> Result<(), (Phase, EngineError)> {
        std::fs::create_dir_all(&run.root)
            .map_err(|e| (Phase::RootCreated, io_err(&run.root, e)))?;
        run.created_root = true;
        run.completed.push(Phase::RootCreated);

        self.engine
            .structure()
            .build(&run.root, &self.config.flags)
            .map_err(|e| (Phase::StructureBuilt, e))?;
        run.completed.push(Phase::StructureBuilt);

        for batch in self.engine.plan().batches() {
            log::debug!("phase {}: {} template(s)", batch.phase, batch.templates.len());
            self.write_batch(&run.root, batch, ctx)
                .map_err(|e| (batch.phase, e))?;
            if batch.phase == Phase::MiscFiles {
                self.write_env_configs(&run.root, ctx)
                    .map_err(|e| (Phase::MiscFiles, e))?;
            }
            run.completed.push(batch.phase);
        }
        Ok(())
    }

    fn write_batch(
        &self,
        root: &Path,
        batch: &PhaseBatch,
        ctx: &RenderContext,
    ) -> Result<(), EngineError> {
        for name in &batch.templates {
            self.write_template(root, name, ctx)?;
        }
        Ok(())
    }

    /// Validate, render, resolve and write one template.
    fn write_template(
        &self,
        root: &Path,
        name: &str,
        ctx: &RenderContext,
    ) -> Result<(), EngineError> {
        let text = self.engine.store().get(name)?;
        let rel = match self.engine.mappings().resolve(name, ctx) {
            Resolution::Skipped => {
                log::debug!("skipped (predicate false): {name}");
                return Ok(());
            }
            Resolution::Mapped(rel) => rel,
            Resolution::UseFallback => {
                let rel = fallback_target(name);
                log::debug!("unmapped template {name}, fallback: {}", rel.display());
                rel
            }
        };
        write_file(&root.join(rel), &render(text, ctx))
    }

    /// `config/app_{dev,test,prod}.yaml`, derived from the shared context.
    fn write_env_configs(&self, root: &Path, ctx: &RenderContext) -> Result<(), EngineError> {
        for env in Env::all() {
            let yaml = EnvConfigBuilder::from_context(*env, ctx).build()?;
            write_file(&root.join(env.config_path()), &yaml)?;
        }
        Ok(())
    }

    /// Compensating action: delete the root this run created. A failed
    /// deletion is logged and swallowed so it never masks the actual cause.
    fn rollback(&self, run: &GenerationRun) {
        if !run.created_root {
            return;
        }
        log::debug!("rolling back partial project at {}", run.root.display());
        if let Err(e) = std::fs::remove_dir_all(&run.root) {
            log::warn!(
                "rollback failed to remove {}: {e}",
                run.root.display()
            );
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), EngineError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| io_err(path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
