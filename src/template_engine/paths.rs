//! Output location rendering from the directory and file name patterns.

use std::path::PathBuf;

use super::engine::{EngineError, TemplateEngine};
use crate::source::SourceRecord;

pub const DEFAULT_OUTDIR: &str = "models/{{ project_normalized }}/{{ dataset }}/{{ table }}";
pub const DEFAULT_OUTFILE: &str = "src_{{ project_normalized }}__{{ dataset }}__{{ table }}.yml";

/// Directory and file name patterns, each rendered against the source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPatterns {
    pub outdir: String,
    pub outfile: String,
}

impl Default for PathPatterns {
    fn default() -> Self {
        Self {
            outdir: DEFAULT_OUTDIR.to_string(),
            outfile: DEFAULT_OUTFILE.to_string(),
        }
    }
}

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl PathPatterns {
    pub fn render(
        &self,
        engine: &TemplateEngine,
        record: &SourceRecord,
    ) -> Result<OutputLocation, EngineError> {
        let dir = PathBuf::from(engine.render_string(&self.outdir, record)?);
        let filename = engine.render_string(&self.outfile, record)?;
        if filename.trim().is_empty() {
            return Err(EngineError::EmptyFileName {
                pattern: self.outfile.clone(),
            });
        }

        let file = dir.join(&filename);
        tracing::debug!(?dir, ?file, "Rendered output location");
        Ok(OutputLocation { dir, file })
    }
}
