//! Pinned dependency catalog for generated projects.
//!
//! Versions are deliberately exact: a scaffolded project must install the
//! same dependency set regardless of when it was generated.

use crate::types::DbKind;

/// Redis client dependency line, included when the redis flag is set.
pub const REDIS_DEPENDENCY: &str = "redis==7.1.0";

/// Driver dependency lines for a database backend.
pub fn db_dependencies(kind: DbKind) -> &'static [&'static str] {
    match kind {
        DbKind::Sqlite => &["aiosqlite==0.21.0"],
        DbKind::Mysql => &["aiomysql==0.2.0", "pymysql==1.1.0"],
        DbKind::Postgresql => &["asyncpg==0.29.0", "psycopg2-binary==2.9.9"],
    }
}

/// Pre-joined `db_deps` value for the render context (one line per driver).
pub fn db_dependency_lines(kind: DbKind) -> String {
    db_dependencies(kind).join("\n")
}

/// Pre-joined `redis_deps` value for the render context; empty when disabled.
pub fn redis_dependency_lines(enabled: bool) -> String {
    if enabled {
        REDIS_DEPENDENCY.to_string()
    } else {
        String::new()
    }
}
