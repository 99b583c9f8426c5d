//! Top-level error for a generation run.

use thiserror::Error;

use crate::cli_config::ConfigError;
use crate::source::SourceError;
use crate::template_engine::EngineError;
use crate::warehouse::WarehouseError;

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Every variant is fatal to the run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid table reference: {0}")]
    Source(#[from] SourceError),

    #[error("metadata lookup failed: {0}")]
    Warehouse(#[from] WarehouseError),

    #[error("template error: {0}")]
    Template(#[from] EngineError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create file {path}: {source}")]
    CreateFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
