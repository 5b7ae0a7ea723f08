//! CLI configuration loading
//!
//! Reads `playground.json` (or the file given with `--config`) into an
//! `EvalConfig`. A missing default file means "use defaults"; a missing
//! explicit file is an error.

use playground_config::EvalConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "playground.json";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config file '{}' not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolve and load the configuration
pub fn load(explicit: Option<&Path>) -> Result<EvalConfig, CliError> {
    load_or_default(explicit, Path::new(DEFAULT_CONFIG_FILE))
}

/// `explicit` must exist; `fallback` is optional
fn load_or_default(explicit: Option<&Path>, fallback: &Path) -> Result<EvalConfig, CliError> {
    match explicit {
        Some(path) if !path.exists() => Err(CliError::ConfigNotFound(path.to_path_buf())),
        Some(path) => read(path),
        None if fallback.exists() => read(fallback),
        None => Ok(EvalConfig::default()),
    }
}

fn read(path: &Path) -> Result<EvalConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
