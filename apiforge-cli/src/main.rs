//! apiforge — FastAPI project scaffolding CLI.
//!
//! # Usage
//!
//! ```text
//! apiforge new <name> [--db sqlite|mysql|postgresql] [--redis] [--celery] [--output-dir DIR]
//! apiforge add <module> [--path DIR] [--version vN]
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use apiforge_core::types::DbKind;
use commands::{add::AddArgs, new::NewArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "apiforge",
    version,
    about = "Scaffold FastAPI service projects and add feature modules",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new project skeleton.
    New(NewArgs),

    /// Add a feature module (route, service, model, schema) to an existing project.
    Add(AddArgs),
}

// ---------------------------------------------------------------------------
// Shared DbKind argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `DbKind` from CLI args.
#[derive(Debug, Clone, Default)]
pub struct DbKindArg(pub DbKind);

impl FromStr for DbKindArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self(DbKind::Sqlite)),
            "mysql" => Ok(Self(DbKind::Mysql)),
            "postgresql" => Ok(Self(DbKind::Postgresql)),
            other => Err(format!(
                "unknown database kind '{other}'; expected: sqlite, mysql, postgresql"
            )),
        }
    }
}

impl fmt::Display for DbKindArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DbKindArg> for DbKind {
    fn from(d: DbKindArg) -> Self {
        d.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::New(args) => args.run(),
        Commands::Add(args) => args.run(),
    }
}
