//! Catalog-wide rendering checks against the shipped templates.

use std::path::PathBuf;

use apiforge_core::types::{DbKind, FeatureFlags, GenerationConfig, ProjectName};
use apiforge_templates::{render, RenderContext, TemplateStore};

fn base_ctx(db: DbKind, redis: bool, celery: bool) -> RenderContext {
    RenderContext::base(&GenerationConfig {
        project_name: ProjectName::from("shopapi"),
        db_kind: db,
        flags: FeatureFlags { redis, celery },
        output_dir: PathBuf::from("."),
    })
}

#[test]
fn every_shipped_template_renders_without_panicking() {
    let store = TemplateStore::builtin();
    let ctx = base_ctx(DbKind::Postgresql, true, true);
    for name in store.names() {
        let text = store.get(name).expect("get");
        let rendered = render(text, &ctx);
        assert!(!rendered.is_empty(), "{name} rendered empty");
    }
}

#[test]
fn project_name_flows_into_branded_templates() {
    let store = TemplateStore::builtin();
    let ctx = base_ctx(DbKind::Sqlite, false, false);
    for name in ["README.md", "Dockerfile", "docker_compose.yaml", "package.json"] {
        let rendered = render(store.get(name).expect("get"), &ctx);
        assert!(rendered.contains("shopapi"), "{name} missing project name");
        assert!(!rendered.contains("${project_name}"), "{name} left placeholder");
    }
}

#[test]
fn requirements_template_joins_dependency_lines() {
    let store = TemplateStore::builtin();
    let rendered = render(
        store.get("requirements.txt").expect("get"),
        &base_ctx(DbKind::Mysql, true, false),
    );
    assert!(rendered.contains("aiomysql==0.2.0\npymysql==1.1.0"));
    assert!(rendered.contains("redis==7.1.0"));
}

#[test]
fn package_json_is_valid_json_after_rendering() {
    let store = TemplateStore::builtin();
    let rendered = render(
        store.get("package.json").expect("get"),
        &base_ctx(DbKind::Sqlite, false, false),
    );
    let value: serde_json::Value = serde_json::from_str(&rendered)
        .unwrap_or_else(|e| panic!("invalid JSON: {e}\n{rendered}"));
    assert_eq!(value["name"], "shopapi-tools");
}

#[test]
fn module_templates_keep_unknown_placeholders_out_of_project_context() {
    // Module templates reference module keys that a project-level context
    // does not define; safe substitution must leave them verbatim.
    let store = TemplateStore::builtin();
    let rendered = render(
        store.get("api_module").expect("get"),
        &base_ctx(DbKind::Sqlite, false, false),
    );
    assert!(rendered.contains("${ModuleName}"));
    assert!(rendered.contains("${module_name}"));
}

#[test]
fn no_rendered_template_contains_crlf() {
    let store = TemplateStore::builtin();
    let ctx = base_ctx(DbKind::Sqlite, false, false);
    for name in store.names() {
        let rendered = render(store.get(name).expect("get"), &ctx);
        assert!(!rendered.contains('\r'), "{name} contains CR char");
    }
}
