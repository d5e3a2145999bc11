use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AttnBenchError {
    #[error("Failed to launch {path}: {source}")]
    LaunchFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}
