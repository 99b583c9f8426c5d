//! Runtime template engine for source documents and output paths.
//!
//! Uses Tera with a small filter library registered on top of its built-ins.
//! The content template is either the embedded default or a user-supplied file;
//! output paths come from two more inline templates rendered by the same engine.

mod default_template;
mod engine;
mod filters;
mod paths;

pub use engine::{EngineError, TemplateEngine};
pub use paths::{OutputLocation, PathPatterns, DEFAULT_OUTDIR, DEFAULT_OUTFILE};
