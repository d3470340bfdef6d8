//! Domain types for the apiforge generator.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! Identifier newtypes carry raw user input that has already passed
//! [`crate::validate`] before entering a config.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a generated project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectName(pub String);

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for a feature module added to an existing project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleName(pub String);

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModuleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A versioned API namespace such as `v1`. Validated as `^v\d+$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiVersion(pub String);

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ApiVersion {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Database backend for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbKind {
    #[default]
    Sqlite,
    Mysql,
    Postgresql,
}

impl DbKind {
    /// All backends in a stable order.
    pub fn all() -> &'static [DbKind] {
        &[DbKind::Sqlite, DbKind::Mysql, DbKind::Postgresql]
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbKind::Sqlite => write!(f, "sqlite"),
            DbKind::Mysql => write!(f, "mysql"),
            DbKind::Postgresql => write!(f, "postgresql"),
        }
    }
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Optional feature subsystems toggled at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeatureFlags {
    pub redis: bool,
    pub celery: bool,
}

/// Validated input for one full project generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub project_name: ProjectName,
    pub db_kind: DbKind,
    pub flags: FeatureFlags,
    /// Directory the project root is created under.
    pub output_dir: PathBuf,
}

impl GenerationConfig {
    /// `<output_dir>/<project_name>` — the root this run will create and own.
    pub fn project_path(&self) -> PathBuf {
        self.output_dir.join(&self.project_name.0)
    }
}

/// Validated input for one `add` invocation. Transient: consumed by the
/// augmentor and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub name: ModuleName,
    pub version: ApiVersion,
}

impl ModuleSpec {
    /// PascalCase identifier derived from the raw module name:
    /// `order_item` → `OrderItem`.
    pub fn pascal_name(&self) -> String {
        pascal_case(&self.name.0)
    }
}

/// Convert a snake/kebab-case identifier to PascalCase.
pub fn pascal_case(name: &str) -> String {
    name.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ProjectName::from("shopapi").to_string(), "shopapi");
        assert_eq!(ModuleName::from("order").to_string(), "order");
        assert_eq!(ApiVersion::from("v2").to_string(), "v2");
    }

    #[test]
    fn newtype_equality() {
        let a = ProjectName::from("x");
        let b = ProjectName::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn db_kind_display() {
        assert_eq!(DbKind::Sqlite.to_string(), "sqlite");
        assert_eq!(DbKind::Postgresql.to_string(), "postgresql");
    }

    #[test]
    fn project_path_joins_name() {
        let config = GenerationConfig {
            project_name: ProjectName::from("shopapi"),
            db_kind: DbKind::default(),
            flags: FeatureFlags::default(),
            output_dir: PathBuf::from("/tmp/out"),
        };
        assert_eq!(config.project_path(), PathBuf::from("/tmp/out/shopapi"));
    }

    #[test]
    fn pascal_case_single_word() {
        assert_eq!(pascal_case("order"), "Order");
    }

    #[test]
    fn pascal_case_splits_separators() {
        assert_eq!(pascal_case("order_item"), "OrderItem");
        assert_eq!(pascal_case("order-item"), "OrderItem");
        assert_eq!(pascal_case("user_login_log"), "UserLoginLog");
    }

    #[test]
    fn module_spec_pascal_name() {
        let spec = ModuleSpec {
            name: ModuleName::from("payment_record"),
            version: ApiVersion::from("v1"),
        };
        assert_eq!(spec.pascal_name(), "PaymentRecord");
    }
}
