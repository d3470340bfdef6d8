//! apiforge core library — domain types, dependency catalog, validation.
//!
//! Public API surface:
//! - [`types`] — newtypes, enums and config structs
//! - [`deps`] — pinned dependency catalog for generated projects
//! - [`validate`] — name/version rules and [`ValidationError`]

pub mod deps;
pub mod types;
pub mod validate;

pub use types::{
    ApiVersion, DbKind, FeatureFlags, GenerationConfig, ModuleName, ModuleSpec,
    ProjectName,
};
pub use validate::{NameKind, ValidationError};
