//! dbt-source-gen
//!
//! Writes a dbt `sources` YAML file for one BigQuery table.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dbt_source_gen::cli::Cli;
use dbt_source_gen::{commands, output};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::handle_generate_command(&cli) {
        output::error(e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "dbt_source_gen=debug"
    } else {
        "dbt_source_gen=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}
