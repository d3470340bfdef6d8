//! # apiforge-templates
//!
//! Template catalog and the safe placeholder renderer.
//!
//! ## Usage
//!
//! ```rust
//! use apiforge_templates::{render, RenderContext, TemplateStore};
//!
//! let store = TemplateStore::builtin();
//! let ctx = RenderContext::new().with("project_name", "shopapi");
//! if let Ok(text) = store.get("README.md") {
//!     let rendered = render(text, &ctx);
//!     assert!(rendered.contains("shopapi"));
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod render;
pub mod store;

pub use config::{Env, EnvConfigBuilder};
pub use context::{RenderContext, Value};
pub use error::TemplateError;
pub use render::render;
pub use store::{canonical_name, TemplateStore};
