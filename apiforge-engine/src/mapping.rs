//! Template → output-path resolution.
//!
//! Resolution is a tagged lookup: a table entry with a passing (or absent)
//! predicate yields `Mapped`, a failing predicate yields `Skipped` (the
//! template produces no file this run — there is no fallback path for a
//! skipped template), and a missing entry yields `UseFallback`, at which
//! point callers derive a destination with [`fallback_target`] so unmapped
//! custom templates still land somewhere sensible.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use apiforge_templates::{canonical_name, RenderContext};

/// Context predicate gating whether a mapping applies at all.
pub type Predicate = fn(&RenderContext) -> bool;

/// One table entry: target path relative to the project root, plus an
/// optional gate.
#[derive(Debug, Clone)]
pub struct OutputMapping {
    pub target: PathBuf,
    pub predicate: Option<Predicate>,
}

/// Outcome of resolving a template name against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Write the rendered template to this path (relative to project root).
    Mapped(PathBuf),
    /// Predicate is false for this context: write nothing for this template.
    Skipped,
    /// No table entry: derive a destination from the legacy convention.
    UseFallback,
}

/// Static table mapping canonical template names to output paths.
///
/// Invariant: a template name resolves to at most one active target path
/// per run.
#[derive(Debug, Clone, Default)]
pub struct OutputMappingTable {
    entries: HashMap<String, OutputMapping>,
}

impl OutputMappingTable {
    /// A table with no entries; every lookup yields `UseFallback`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: &str,
        target: impl Into<PathBuf>,
        predicate: Option<Predicate>,
    ) {
        self.entries.insert(
            canonical_name(name).to_owned(),
            OutputMapping {
                target: target.into(),
                predicate,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// O(1) lookup by canonical template name.
    pub fn resolve(&self, name: &str, ctx: &RenderContext) -> Resolution {
        match self.entries.get(canonical_name(name)) {
            None => Resolution::UseFallback,
            Some(mapping) => match mapping.predicate {
                Some(predicate) if !predicate(ctx) => Resolution::Skipped,
                _ => Resolution::Mapped(mapping.target.clone()),
            },
        }
    }

    /// The table shipped with the generator, covering every template the
    /// default plan writes.
    pub fn shipped() -> Self {
        fn celery_enabled(ctx: &RenderContext) -> bool {
            ctx.flag("enable_celery")
        }

        let mut table = Self::empty();
        let unconditional: &[(&str, &str)] = &[
            // core
            ("main", "app/main.py"),
            ("app_init", "app/__init__.py"),
            // initializer
            ("initializer_init", "app/initializer/__init__.py"),
            ("pydantic_settings_config", "app/initializer/_settings.py"),
            ("initializer_db", "app/initializer/_db.py"),
            ("initializer_log", "app/initializer/_log.py"),
            ("initializer_redis", "app/initializer/_redis.py"),
            ("initializer_snow", "app/initializer/_snow.py"),
            ("initializer_context", "app/initializer/context.py"),
            // cache — always generated, degrades to in-memory at runtime
            ("cache_init", "app/cache/__init__.py"),
            ("cache_manager", "app/cache/manager.py"),
            // middleware
            ("middleware_init", "app/middleware/__init__.py"),
            ("middleware_cors", "app/middleware/cors.py"),
            ("middleware_exceptions", "app/middleware/exceptions.py"),
            ("middleware_http", "app/middleware/http.py"),
            // utils
            ("utils_jwt", "app/utils/jwt_util.py"),
            ("utils_db_async", "app/utils/db_async_util.py"),
            ("utils_api_key", "app/utils/api_key_util.py"),
            // api
            ("api_init", "app/api/__init__.py"),
            ("api_dependencies", "app/api/dependencies.py"),
            ("api_exceptions", "app/api/exceptions.py"),
            ("api_responses", "app/api/responses.py"),
            ("api_status", "app/api/status.py"),
            ("api_ping", "app/api/default/ping.py"),
            // layer markers
            ("models_init", "app/models/__init__.py"),
            ("schemas_init", "app/schemas/__init__.py"),
            ("services_init", "app/services/__init__.py"),
            // enterprise
            ("unified_router", "app/api/unified_router.py"),
            ("exception_system", "app/api/exceptions_enterprise.py"),
            ("context_logging", "app/utils/context_logging.py"),
            ("logging_fastcrud", "app/utils/logging_fastcrud.py"),
            ("lifespan_manager", "app/core/lifespan.py"),
            // tests
            ("conftest", "tests/conftest.py"),
            ("test_example", "tests/test_example.py"),
            ("pytest.ini", "pytest.ini"),
            ("generate_code.js", "generate_code.js"),
            ("package.json", "package.json"),
            // docs
            ("docs_api.md", "docs/api.md"),
            ("docs_development.md", "docs/development.md"),
            ("docs_deployment.md", "docs/deployment.md"),
            // project root
            ("requirements.txt", "requirements.txt"),
            ("pyproject.toml", "pyproject.toml"),
            ("runserver", "runserver.py"),
            ("README.md", "README.md"),
            ("gitignore", ".gitignore"),
            ("dockerignore", ".dockerignore"),
            ("Dockerfile", "Dockerfile"),
            ("docker_compose.yaml", "docker-compose.yaml"),
            ("env_example", ".env.example"),
            ("uv.toml", "uv.toml"),
        ];
        for (name, target) in unconditional {
            table.insert(name, *target, None);
        }
        table.insert("celery_app", "app_celery/app.py", Some(celery_enabled));
        table
    }
}

// ---------------------------------------------------------------------------
// Legacy fallback derivation
// ---------------------------------------------------------------------------

/// Convention-based destination for a template with no table entry.
///
/// Family-prefixed code templates land in their layer directory
/// (`initializer_` entries keep the leading-underscore module convention);
/// anything else keeps its requested name at the project root.
pub fn fallback_target(name: &str) -> PathBuf {
    let canonical = canonical_name(name);
    if let Some(rest) = canonical.strip_prefix("initializer_") {
        return Path::new("app")
            .join("initializer")
            .join(format!("_{rest}.py"));
    }
    for (prefix, dir) in [
        ("middleware_", "middleware"),
        ("utils_", "utils"),
        ("api_", "api"),
        ("cache_", "cache"),
    ] {
        if let Some(rest) = canonical.strip_prefix(prefix) {
            return Path::new("app").join(dir).join(format!("{rest}.py"));
        }
    }
    PathBuf::from(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(celery: bool) -> RenderContext {
        RenderContext::new()
            .with("project_name", "shopapi")
            .with("enable_celery", celery)
    }

    #[test]
    fn unconditional_mapping_resolves() {
        let table = OutputMappingTable::shipped();
        assert_eq!(
            table.resolve("initializer_db", &ctx(false)),
            Resolution::Mapped(PathBuf::from("app/initializer/_db.py"))
        );
    }

    #[test]
    fn suffixed_name_resolves_like_stem() {
        let table = OutputMappingTable::shipped();
        assert_eq!(
            table.resolve("cache_manager.py", &ctx(false)),
            Resolution::Mapped(PathBuf::from("app/cache/manager.py"))
        );
    }

    #[test]
    fn gated_mapping_follows_flag() {
        let table = OutputMappingTable::shipped();
        assert_eq!(table.resolve("celery_app", &ctx(false)), Resolution::Skipped);
        assert_eq!(
            table.resolve("celery_app", &ctx(true)),
            Resolution::Mapped(PathBuf::from("app_celery/app.py"))
        );
    }

    #[test]
    fn unmapped_name_uses_fallback() {
        let table = OutputMappingTable::shipped();
        assert_eq!(
            table.resolve("custom_widget", &ctx(false)),
            Resolution::UseFallback
        );
    }

    #[test]
    fn fallback_strips_family_prefixes() {
        assert_eq!(
            fallback_target("initializer_db"),
            PathBuf::from("app/initializer/_db.py")
        );
        assert_eq!(
            fallback_target("middleware_cors.py"),
            PathBuf::from("app/middleware/cors.py")
        );
        assert_eq!(fallback_target("utils_jwt"), PathBuf::from("app/utils/jwt.py"));
        assert_eq!(fallback_target("api_status"), PathBuf::from("app/api/status.py"));
        assert_eq!(
            fallback_target("cache_warmup"),
            PathBuf::from("app/cache/warmup.py")
        );
    }

    #[test]
    fn fallback_leaves_unrecognized_names_at_root() {
        assert_eq!(fallback_target("NOTICE.md"), PathBuf::from("NOTICE.md"));
        assert_eq!(fallback_target("Dockerfile"), PathBuf::from("Dockerfile"));
    }

    #[test]
    fn shipped_table_has_one_entry_per_plan_template() {
        let table = OutputMappingTable::shipped();
        assert!(table.len() > 50);
    }
}
