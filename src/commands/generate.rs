//! Source document generation.
//!
//! Sequence per run: fetch metadata, build the record, compile the content
//! template, render the output location, write the document. Each step is
//! fatal on failure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::cli_config::{expand_path, load_cli_config, load_config_file, CliConfig};
use crate::error::{GenerateError, GenerateResult};
use crate::output;
use crate::source::{SourceRecord, TableRef};
use crate::template_engine::{OutputLocation, PathPatterns, TemplateEngine};
use crate::warehouse::{
    resolve_access_token, BigQueryClient, FileMetadataSource, MetadataSource,
    DEFAULT_API_ENDPOINT,
};

/// Effective settings after layering flags over the config file.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub table: TableRef,
    pub template: Option<PathBuf>,
    pub patterns: PathPatterns,
    pub metadata_file: Option<PathBuf>,
    pub api_endpoint: String,
    pub access_token: Option<String>,
}

impl GenerateSettings {
    pub fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        let defaults = PathPatterns::default();
        Self {
            table: TableRef::new(&cli.project, &cli.dataset, &cli.table),
            template: cli
                .template
                .clone()
                .or_else(|| config.template.as_deref().map(expand_path)),
            patterns: PathPatterns {
                outdir: cli
                    .outdir
                    .clone()
                    .or_else(|| config.outdir.clone())
                    .unwrap_or(defaults.outdir),
                outfile: cli
                    .outfile
                    .clone()
                    .or_else(|| config.outfile.clone())
                    .unwrap_or(defaults.outfile),
            },
            metadata_file: cli.metadata_file.clone(),
            api_endpoint: cli
                .api_endpoint
                .clone()
                .or_else(|| config.api_endpoint.clone())
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            access_token: cli
                .access_token
                .clone()
                .or_else(|| config.access_token.clone()),
        }
    }
}

pub fn handle_generate_command(cli: &Cli) -> GenerateResult<()> {
    let config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_cli_config(),
    };
    let settings = GenerateSettings::resolve(cli, &config);
    settings.table.validate()?;
    tracing::debug!(
        template = ?settings.template,
        patterns = ?settings.patterns,
        "Resolved settings"
    );

    let source = metadata_source(&settings)?;
    let location = generate(source.as_ref(), &settings)?;

    output::success(format!(
        "File {} is generated under {} for {}",
        location
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        location.dir.display(),
        settings.table
    ));
    Ok(())
}

fn metadata_source(settings: &GenerateSettings) -> GenerateResult<Box<dyn MetadataSource>> {
    match &settings.metadata_file {
        Some(path) => Ok(Box::new(FileMetadataSource::new(path))),
        None => {
            let token = resolve_access_token(settings.access_token.as_deref())?;
            Ok(Box::new(BigQueryClient::new(&settings.api_endpoint, token)?))
        }
    }
}

/// Run one generation and return where the document was written.
pub fn generate(
    source: &dyn MetadataSource,
    settings: &GenerateSettings,
) -> GenerateResult<OutputLocation> {
    settings.table.validate()?;

    let meta = source.fetch_table(&settings.table)?;
    let record = SourceRecord::from_metadata(&settings.table, &meta)?;
    if record.columns().is_empty() {
        output::warning(format!("{} has no columns", settings.table));
    }

    let engine = TemplateEngine::resolve(settings.template.as_deref())?;
    let location = settings.patterns.render(&engine, &record)?;
    write_document(&engine, &record, &location)?;

    Ok(location)
}

/// Create the output directory and stream the rendered document into the file.
///
/// The file name may itself carry subdirectories; those are created too.
/// A render failure leaves a truncated or partial file behind.
pub fn write_document(
    engine: &TemplateEngine,
    record: &SourceRecord,
    location: &OutputLocation,
) -> GenerateResult<()> {
    let parent = location.file.parent().unwrap_or(&location.dir);
    std::fs::create_dir_all(parent).map_err(|e| GenerateError::CreateDir {
        path: parent.to_path_buf(),
        source: e,
    })?;

    let file = File::create(&location.file).map_err(|e| GenerateError::CreateFile {
        path: location.file.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    engine.render_to(record, &mut writer)?;
    writer.flush().map_err(|e| GenerateError::Write {
        path: location.file.clone(),
        source: e,
    })?;

    tracing::info!(
        path = %location.file.display(),
        template = engine.template_name(),
        "Wrote source document"
    );
    Ok(())
}
