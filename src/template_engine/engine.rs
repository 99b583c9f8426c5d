//! Tera-based content template resolution and rendering.

use std::io::Write;
use std::path::Path;

use tera::{Context, Tera};

use super::default_template::{DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_NAME};
use super::filters;
use crate::source::SourceRecord;

const INLINE_TEMPLATE_NAME: &str = "__inline__";

/// A compiled content template with the filter library bound.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
    template_name: String,
}

impl TemplateEngine {
    /// Compile the template at `template_path`, or the built-in template when `None`.
    pub fn resolve(template_path: Option<&Path>) -> Result<Self, EngineError> {
        match template_path {
            None => Self::from_source(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE),
            Some(path) => Self::from_file(path),
        }
    }

    /// Compile a user template file. Its base name becomes the template name.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let source = std::fs::read_to_string(path).map_err(|e| EngineError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::debug!(?path, template = %name, "Loading content template");
        Self::from_source(&name, &source)
    }

    pub fn from_source(name: &str, source: &str) -> Result<Self, EngineError> {
        let mut tera = Tera::default();
        // Output is YAML, never HTML, whatever the file extension says.
        tera.autoescape_on(Vec::new());
        filters::register(&mut tera);

        tera.add_raw_template(name, source)
            .map_err(|e| EngineError::Compile {
                template: name.to_string(),
                source: e,
            })?;

        Ok(Self {
            tera,
            template_name: name.to_string(),
        })
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// Stream the content template's output for `record` into `writer`.
    pub fn render_to(&self, record: &SourceRecord, writer: impl Write) -> Result<(), EngineError> {
        let context = binding_context(record);
        self.tera
            .render_to(&self.template_name, &context, writer)
            .map_err(|e| EngineError::Render {
                template: self.template_name.clone(),
                source: e,
            })
    }

    /// Render the content template into a string.
    pub fn render(&self, record: &SourceRecord) -> Result<String, EngineError> {
        let context = binding_context(record);
        self.tera
            .render(&self.template_name, &context)
            .map_err(|e| EngineError::Render {
                template: self.template_name.clone(),
                source: e,
            })
    }

    /// Render a one-off template string against `record` with the same filters.
    pub fn render_string(
        &self,
        template_str: &str,
        record: &SourceRecord,
    ) -> Result<String, EngineError> {
        // Use a cloned Tera instance so custom filters are available for inline rendering
        let mut inline = self.tera.clone();
        inline
            .add_raw_template(INLINE_TEMPLATE_NAME, template_str)
            .map_err(|e| EngineError::Compile {
                template: template_str.to_string(),
                source: e,
            })?;
        inline
            .render(INLINE_TEMPLATE_NAME, &binding_context(record))
            .map_err(|e| EngineError::Render {
                template: template_str.to_string(),
                source: e,
            })
    }
}

/// The fixed set of names a template can look up.
fn binding_context(record: &SourceRecord) -> Context {
    let mut context = Context::new();
    context.insert("project", record.project());
    context.insert("project_normalized", record.project_normalized());
    context.insert("dataset", record.dataset());
    context.insert("table", record.table());
    context.insert("description", record.description());
    context.insert("columns", record.columns());
    context
}

/// Flatten a Tera error with its causes; Tera keeps parse details in `source()`.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut cause = std::error::Error::source(err);
    while let Some(e) = cause {
        message.push_str(": ");
        message.push_str(&e.to_string());
        cause = e.source();
    }
    message
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("compile error for '{template}': {}", describe(.source))]
    Compile {
        template: String,
        source: tera::Error,
    },
    #[error("render error for '{template}': {}", describe(.source))]
    Render {
        template: String,
        source: tera::Error,
    },
    #[error("pattern '{pattern}' rendered an empty file name")]
    EmptyFileName { pattern: String },
}
