//! Config file defaults for the generator.
//!
//! Values here sit between built-in defaults and command-line flags: a flag
//! always wins, then the config file, then the built-in value.

pub mod loader;

pub use loader::{expand_path, load_cli_config, load_config_file};

use serde::Deserialize;

/// Settings read from `.dbt-source-gen.toml`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CliConfig {
    /// Content template file used when `--template` is not given.
    pub template: Option<String>,

    /// Output directory pattern (Tera syntax).
    pub outdir: Option<String>,

    /// Output file name pattern (Tera syntax).
    pub outfile: Option<String>,

    /// BigQuery API base URL.
    pub api_endpoint: Option<String>,

    /// OAuth access token for the BigQuery API.
    pub access_token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: std::path::PathBuf,
        source: toml::de::Error,
    },
}
