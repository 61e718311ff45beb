//! JSON config file loading.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Loads and parses a JSON config file.
///
/// The file must exist, decode as UTF-8 JSON, and hold a single top-level
/// object.
pub(crate) fn load_json_file(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let value: Value = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::UnexpectedTopLevel {
            path: path.to_path_buf(),
        }),
    }
}
