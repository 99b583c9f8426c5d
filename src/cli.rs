//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::output;

#[derive(Debug, Parser)]
#[command(
    name = "dbt-source-gen",
    version,
    about = "Generate a dbt source definition from BigQuery table metadata",
    styles = output::clap_styles()
)]
pub struct Cli {
    /// GCP project that owns the table
    #[arg(long, env = "DBT_SOURCE_GEN_PROJECT")]
    pub project: String,

    /// Dataset containing the source table
    #[arg(long, env = "DBT_SOURCE_GEN_DATASET")]
    pub dataset: String,

    /// Source table
    #[arg(long, env = "DBT_SOURCE_GEN_TABLE")]
    pub table: String,

    /// Content template file (defaults to the built-in dbt source template)
    #[arg(long, env = "DBT_SOURCE_GEN_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Output directory pattern [default: models/{{ project_normalized }}/{{ dataset }}/{{ table }}]
    #[arg(long)]
    pub outdir: Option<String>,

    /// Output file name pattern [default: src_{{ project_normalized }}__{{ dataset }}__{{ table }}.yml]
    #[arg(long)]
    pub outfile: Option<String>,

    /// Read table metadata from a saved `tables.get` JSON response instead of the API
    #[arg(long)]
    pub metadata_file: Option<PathBuf>,

    /// OAuth access token for the BigQuery API
    #[arg(long)]
    pub access_token: Option<String>,

    /// BigQuery API base URL
    #[arg(long, env = "DBT_SOURCE_GEN_API_ENDPOINT")]
    pub api_endpoint: Option<String>,

    /// Config file to use instead of the discovered `.dbt-source-gen.toml`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
