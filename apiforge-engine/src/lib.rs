//! # apiforge-engine
//!
//! Orchestrated project generation and module augmentation.
//!
//! Build an [`Engine`] once, then run [`ProjectGenerator`] for full project
//! scaffolds (transactional, rolls back on failure) or [`ModuleAugmentor`]
//! to add modules to an existing project (no rollback by design).
//!
//! Single-threaded, synchronous, blocking I/O throughout. At most one run
//! may target a given root at a time; arbitrating concurrent callers is out
//! of scope.

pub mod augment;
pub mod engine;
pub mod error;
pub mod generate;
pub mod mapping;
pub mod structure;

pub use augment::ModuleAugmentor;
pub use engine::{Engine, EngineOptions};
pub use error::EngineError;
pub use generate::{
    FixedProbe, GenerationPlan, GenerationRun, Phase, PhaseBatch, ProjectGenerator,
    ToolingProbe, UvProbe,
};
pub use mapping::{fallback_target, OutputMappingTable, Resolution};
pub use structure::{DirectorySpec, MARKER_CONTENT, PACKAGE_MARKER};
