//! Config file discovery and loading for `.dbt-source-gen.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.dbt-source-gen.toml` (project-local)
//! 2. `~/.config/dbt-source-gen.toml` (user-global)

use std::path::{Path, PathBuf};

use super::{CliConfig, ConfigError};

const CONFIG_FILENAME: &str = ".dbt-source-gen.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "dbt-source-gen.toml";

/// Load config from the first discovered location, or return defaults.
pub fn load_cli_config() -> CliConfig {
    let Some(path) = config_candidates(home_dir().as_deref())
        .into_iter()
        .find(|candidate| candidate.is_file())
    else {
        return CliConfig::default();
    };

    load_config_file(&path).unwrap_or_else(|e| {
        tracing::warn!(?path, error = %e, "Ignoring unreadable config");
        CliConfig::default()
    })
}

/// Load an explicitly named config file. Errors are returned, not swallowed.
pub fn load_config_file(path: &Path) -> Result<CliConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(?path, "Loaded config");
    Ok(config)
}

/// Config locations, highest precedence first.
fn config_candidates(home: Option<&Path>) -> Vec<PathBuf> {
    std::iter::once(PathBuf::from(CONFIG_FILENAME))
        .chain(home.map(|h| h.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME)))
        .collect()
}

/// Resolve a leading `~` against `$HOME`; anything else is taken as-is.
pub fn expand_path(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
