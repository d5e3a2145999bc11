use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::errors::AttnBenchError;

/// Repeat count used when neither the command line nor a config file says
/// otherwise.
pub const DEFAULT_RUNS: usize = 5;

/// File looked up in the working directory before the user config dir.
pub const CONFIG_FILE_NAME: &str = "attnbench.toml";

/// Optional on-disk defaults, layered under the command line.
///
/// ```toml
/// [defaults]
/// runs = 10
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Defaults {
    pub runs: Option<usize>,
}

/// Load the first config file found, or `None` when no file exists.
///
/// Lookup order: `./attnbench.toml`, then `<config_dir>/attnbench/config.toml`.
/// A file that exists but cannot be read or parsed is a hard error.
pub fn load() -> Result<Option<FileConfig>> {
    for path in candidate_paths() {
        if path.is_file() {
            return load_from(&path).map(Some);
        }
    }
    Ok(None)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("attnbench").join("config.toml"));
    }
    paths
}

pub fn load_from(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| AttnBenchError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: FileConfig = toml::from_str(&raw).map_err(|e| AttnBenchError::ConfigParse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    Ok(config)
}

/// Resolve the repeat count: CLI flag wins, then the config file, then 5.
pub fn resolve_runs(cli_runs: Option<usize>, file: Option<&FileConfig>) -> usize {
    cli_runs
        .or_else(|| file.and_then(|f| f.defaults.runs))
        .unwrap_or(DEFAULT_RUNS)
}
