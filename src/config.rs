use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::file::load_json_file;
use crate::merge::deep_merge;

/// A merged, read-only configuration mapping.
///
/// Wraps an owned JSON object; consumers read keys through the accessors
/// below or project the whole mapping into a typed struct with
/// [`deserialize`](Self::deserialize). There is no mutation API.
///
/// ## Example
///
/// ```no_run
/// use ev_config::Config;
///
/// let config = Config::from_files(["config_public_dev.json", "config_private.json"])?;
/// if let Some(host) = config.get("db").and_then(|db| db.get("host")) {
///     println!("db host: {host}");
/// }
/// # Ok::<(), ev_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: Map<String, Value>,
}

impl Config {
    /// Loads each file in turn, deep-merging it over the previously loaded
    /// data. Later files override earlier ones.
    ///
    /// Every file must exist and contain a single top-level JSON object.
    pub fn from_files<I, P>(files: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut values = Map::new();
        for file in files {
            deep_merge(&mut values, load_json_file(file.as_ref())?);
        }
        Ok(Self { values })
    }

    /// Wraps an already-in-memory mapping, bypassing the filesystem.
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Wraps an in-memory JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(ConfigError::NotAnObject),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over the top-level entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the underlying mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Deserializes the mapping into a caller-defined type.
    ///
    /// ```no_run
    /// use ev_config::Config;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Settings {
    ///     debug: bool,
    /// }
    ///
    /// let config = Config::from_files(["config_public_dev.json"])?;
    /// let settings: Settings = config.deserialize()?;
    /// # Ok::<(), ev_config::ConfigError>(())
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_json::from_value(Value::Object(self.values.clone()))
            .map_err(ConfigError::DeserializeError)
    }
}

impl From<Map<String, Value>> for Config {
    fn from(values: Map<String, Value>) -> Self {
        Self::from_map(values)
    }
}
