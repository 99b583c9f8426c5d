//! Generate dbt source definitions from BigQuery table metadata.
//!
//! Table metadata is mapped into a [`source::SourceRecord`], then rendered
//! through a Tera content template (built-in or user-supplied) into a YAML
//! file whose location is computed by two more templates.
//!
//! # Modules
//!
//! - [`source`]: Template-facing data model built from warehouse metadata
//! - [`warehouse`]: BigQuery API client and offline metadata file source
//! - [`template_engine`]: Template resolution, filters and output path rendering
//! - [`commands`]: The generation run that ties the pieces together
//! - [`cli_config`]: `.dbt-source-gen.toml` discovery and loading

pub mod cli;
pub mod cli_config;
pub mod commands;
pub mod error;
pub mod output;
pub mod source;
pub mod template_engine;
pub mod warehouse;

pub use error::{GenerateError, GenerateResult};
