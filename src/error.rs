use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("config file '{path}' does not contain a top-level JSON object")]
    UnexpectedTopLevel { path: PathBuf },

    #[error("config value is not a JSON object")]
    NotAnObject,

    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] serde_json::Error),
}
