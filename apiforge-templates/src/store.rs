//! Template catalog — embedded base set plus optional on-disk overrides.
//!
//! # Identity rules
//!
//! | Class                          | Key            |
//! |--------------------------------|----------------|
//! | code templates (`*.py`)        | file stem      |
//! | `.txt .md .ini .toml .yaml .json .js` | full filename |
//! | extensionless specials         | full filename  |
//!
//! Extensionless specials: `Dockerfile`, `gitignore`, `dockerignore`,
//! `env_example`. Lookups normalize the same way, so `get("main")` and
//! `get("main.py")` resolve to the same entry.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{io_err, TemplateError};

// ---------------------------------------------------------------------------
// Embedded catalog — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    // core
    ("main.py", include_str!("templates/main.py")),
    ("app_init.py", include_str!("templates/app_init.py")),
    // initializer
    ("initializer_init.py", include_str!("templates/initializer_init.py")),
    (
        "pydantic_settings_config.py",
        include_str!("templates/pydantic_settings_config.py"),
    ),
    ("initializer_db.py", include_str!("templates/initializer_db.py")),
    ("initializer_log.py", include_str!("templates/initializer_log.py")),
    ("initializer_redis.py", include_str!("templates/initializer_redis.py")),
    ("initializer_snow.py", include_str!("templates/initializer_snow.py")),
    (
        "initializer_context.py",
        include_str!("templates/initializer_context.py"),
    ),
    // cache
    ("cache_init.py", include_str!("templates/cache_init.py")),
    ("cache_manager.py", include_str!("templates/cache_manager.py")),
    // middleware
    ("middleware_init.py", include_str!("templates/middleware_init.py")),
    ("middleware_cors.py", include_str!("templates/middleware_cors.py")),
    (
        "middleware_exceptions.py",
        include_str!("templates/middleware_exceptions.py"),
    ),
    ("middleware_http.py", include_str!("templates/middleware_http.py")),
    // utils
    ("utils_jwt.py", include_str!("templates/utils_jwt.py")),
    ("utils_db_async.py", include_str!("templates/utils_db_async.py")),
    ("utils_api_key.py", include_str!("templates/utils_api_key.py")),
    // api
    ("api_init.py", include_str!("templates/api_init.py")),
    ("api_dependencies.py", include_str!("templates/api_dependencies.py")),
    ("api_exceptions.py", include_str!("templates/api_exceptions.py")),
    ("api_responses.py", include_str!("templates/api_responses.py")),
    ("api_status.py", include_str!("templates/api_status.py")),
    ("api_ping.py", include_str!("templates/api_ping.py")),
    // layer markers
    ("models_init.py", include_str!("templates/models_init.py")),
    ("schemas_init.py", include_str!("templates/schemas_init.py")),
    ("services_init.py", include_str!("templates/services_init.py")),
    // enterprise
    ("unified_router.py", include_str!("templates/unified_router.py")),
    ("exception_system.py", include_str!("templates/exception_system.py")),
    ("context_logging.py", include_str!("templates/context_logging.py")),
    ("logging_fastcrud.py", include_str!("templates/logging_fastcrud.py")),
    ("lifespan_manager.py", include_str!("templates/lifespan_manager.py")),
    // task queue
    ("celery_app.py", include_str!("templates/celery_app.py")),
    // tests
    ("conftest.py", include_str!("templates/conftest.py")),
    ("test_example.py", include_str!("templates/test_example.py")),
    ("pytest.ini", include_str!("templates/pytest.ini")),
    ("generate_code.js", include_str!("templates/generate_code.js")),
    ("package.json", include_str!("templates/package.json")),
    // docs
    ("docs_api.md", include_str!("templates/docs_api.md")),
    ("docs_development.md", include_str!("templates/docs_development.md")),
    ("docs_deployment.md", include_str!("templates/docs_deployment.md")),
    // project root
    ("requirements.txt", include_str!("templates/requirements.txt")),
    ("pyproject.toml", include_str!("templates/pyproject.toml")),
    ("runserver.py", include_str!("templates/runserver.py")),
    ("README.md", include_str!("templates/README.md")),
    ("gitignore", include_str!("templates/gitignore")),
    ("dockerignore", include_str!("templates/dockerignore")),
    ("Dockerfile", include_str!("templates/Dockerfile")),
    ("docker_compose.yaml", include_str!("templates/docker_compose.yaml")),
    ("env_example", include_str!("templates/env_example")),
    ("uv.toml", include_str!("templates/uv.toml")),
    // module templates (augmentor)
    ("api_module.py", include_str!("templates/api_module.py")),
    ("service_module.py", include_str!("templates/service_module.py")),
    ("model_module.py", include_str!("templates/model_module.py")),
    ("schema_module.py", include_str!("templates/schema_module.py")),
];

/// Extensions whose templates keep their full filename as the key.
const NAMED_EXTENSIONS: &[&str] = &["txt", "md", "ini", "toml", "yaml", "json", "js"];

/// Extensionless filenames recognized as templates in an override directory.
const SPECIAL_FILES: &[&str] = &["Dockerfile", "gitignore", "dockerignore", "env_example"];

/// Canonical catalog key for a requested or discovered name: code templates
/// drop their `.py` suffix, everything else keeps the full filename.
pub fn canonical_name(name: &str) -> &str {
    name.strip_suffix(".py").unwrap_or(name)
}

// ---------------------------------------------------------------------------
// TemplateStore
// ---------------------------------------------------------------------------

/// Immutable named collection of template texts.
///
/// Loaded once at engine construction and held for the process lifetime;
/// never written back. The embedded catalog is always present; files found
/// in an override directory shadow embedded entries of the same key.
#[derive(Debug)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Embedded catalog only.
    pub fn builtin() -> Self {
        let mut templates = HashMap::with_capacity(TPLS.len());
        for (name, content) in TPLS {
            templates.insert(canonical_name(name).to_owned(), (*content).to_string());
        }
        TemplateStore { templates }
    }

    /// Embedded catalog plus overrides from `override_dir`, if given.
    /// A missing override directory is not an error — the embedded catalog
    /// serves as the fallback.
    pub fn new(override_dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut store = Self::builtin();
        if let Some(dir) = override_dir {
            let overrides = load_override_templates(dir)?;
            log::debug!(
                "loaded {} template override(s) from {}",
                overrides.len(),
                dir.display()
            );
            for (name, content) in overrides {
                store.templates.insert(name, content);
            }
        }
        Ok(store)
    }

    pub fn has(&self, name: &str) -> bool {
        self.templates.contains_key(canonical_name(name))
    }

    /// Template text under the canonical form of `name`.
    ///
    /// Failing with [`TemplateError::NotFound`] is a hard error for callers:
    /// normal operation never substitutes empty content for a missing entry.
    pub fn get(&self, name: &str) -> Result<&str, TemplateError> {
        let canonical = canonical_name(name);
        self.templates
            .get(canonical)
            .map(String::as_str)
            .ok_or_else(|| TemplateError::NotFound {
                name: name.to_owned(),
                available: self.names().join(", "),
            })
    }

    /// All catalog keys, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Scan `dir` (non-recursive) for template files by extension class.
fn load_override_templates(dir: &Path) -> Result<Vec<(String, String)>, TemplateError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut templates = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let ext = path.extension().and_then(|e| e.to_str());
        let recognized = match ext {
            Some("py") => true,
            Some(ext) => NAMED_EXTENSIONS.contains(&ext),
            None => SPECIAL_FILES.contains(&file_name),
        };
        if !recognized {
            continue;
        }
        let content = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((canonical_name(file_name).to_owned(), content));
    }
    Ok(templates)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
