//! Memoizing configuration loader.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::env::EnvResolver;
use crate::error::ConfigError;

/// Overrides for a single [`ConfigLoader::get_config_with`] call.
///
/// Any field left unset falls back to the loader's defaults: the environment
/// comes from the environment variable, the public file from the
/// `config_public_<env>.json` convention, and the private file from
/// `config_private.json`.
#[derive(Debug, Clone, Default)]
#[must_use = "options do nothing until passed to get_config_with"]
pub struct ConfigOptions {
    env: Option<String>,
    public_file: Option<PathBuf>,
    private_file: Option<PathBuf>,
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `env` instead of resolving the environment variable.
    ///
    /// The value is passed through as given; an empty string yields
    /// `config_public_.json` as the defaulted public filename.
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Loads the public data from `path` instead of the conventional name.
    pub fn with_public_file(mut self, path: impl AsRef<Path>) -> Self {
        self.public_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Loads the private data from `path` instead of `config_private.json`.
    pub fn with_private_file(mut self, path: impl AsRef<Path>) -> Self {
        self.private_file = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Loads public/private JSON config pairs and memoizes the merged result.
///
/// Construct one loader per process and pass it by reference to call sites.
/// Each distinct `(public_file, private_file)` pair is read from disk once;
/// every later request for the same pair returns a clone of the same
/// [`Arc<Config>`], even if the files have changed on disk since. Failed
/// loads cache nothing, so the next request retries from disk.
///
/// ## Example
///
/// ```no_run
/// use ev_config::{ConfigLoader, ConfigOptions};
///
/// let mut loader = ConfigLoader::new();
///
/// // EV_ENV (or "dev") picks config_public_<env>.json + config_private.json.
/// let config = loader.get_config()?;
///
/// // Or override any part of the selection explicitly.
/// let staging = loader.get_config_with(ConfigOptions::new().with_env("staging"))?;
/// # Ok::<(), ev_config::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    resolver: EnvResolver,
    cache: HashMap<(PathBuf, PathBuf), Arc<Config>>,
}

impl ConfigLoader {
    /// Creates a loader using the default `EV_ENV` variable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader reading the environment name from `varname`.
    pub fn with_env_varname(varname: impl Into<String>) -> Self {
        Self {
            resolver: EnvResolver::new(varname),
            cache: HashMap::new(),
        }
    }

    /// Returns the environment variable name currently consulted.
    pub fn env_varname(&self) -> &str {
        self.resolver.varname()
    }

    /// Replaces the environment variable name.
    ///
    /// Affects future environment resolutions only; configurations already
    /// cached are untouched.
    pub fn set_env_varname(&mut self, varname: impl Into<String>) {
        self.resolver.set_varname(varname);
    }

    /// Returns the environment name: the variable's value if set, `"dev"`
    /// otherwise.
    pub fn env(&self) -> String {
        self.resolver.resolve()
    }

    /// Loads the configuration for the current environment.
    ///
    /// Shorthand for [`get_config_with`](Self::get_config_with) with no
    /// overrides.
    pub fn get_config(&mut self) -> Result<Arc<Config>, ConfigError> {
        self.get_config_with(ConfigOptions::new())
    }

    /// Loads configuration information from the filesystem.
    ///
    /// Resolves the environment and the two filenames from `options` (see
    /// [`ConfigOptions`]), then returns the cached configuration for that
    /// file pair, loading and merging the files first if the pair has not
    /// been seen before. Private keys override public keys recursively.
    pub fn get_config_with(&mut self, options: ConfigOptions) -> Result<Arc<Config>, ConfigError> {
        let env = match options.env {
            Some(env) => env,
            None => self.resolver.resolve(),
        };
        let public_file = options
            .public_file
            .unwrap_or_else(|| PathBuf::from(format!("config_public_{env}.json")));
        let private_file = options
            .private_file
            .unwrap_or_else(|| PathBuf::from("config_private.json"));

        let key = (public_file, private_file);
        if let Some(config) = self.cache.get(&key) {
            return Ok(Arc::clone(config));
        }

        let config = Arc::new(Config::from_files([&key.0, &key.1])?);
        self.cache.insert(key, Arc::clone(&config));
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_repeated_calls_return_identical_object() {
        let dir = TempDir::new().unwrap();
        let public = write_json(&dir, "public.json", &json!({"a": 1}));
        let private = write_json(&dir, "private.json", &json!({"b": 2}));

        let mut loader = ConfigLoader::new();
        let options = ConfigOptions::new()
            .with_public_file(&public)
            .with_private_file(&private);

        let first = loader.get_config_with(options.clone()).unwrap();
        let second = loader.get_config_with(options).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_hit_ignores_file_changes() {
        let dir = TempDir::new().unwrap();
        let public = write_json(&dir, "public.json", &json!({"a": 1}));
        let private = write_json(&dir, "private.json", &json!({}));

        let mut loader = ConfigLoader::new();
        let options = ConfigOptions::new()
            .with_public_file(&public)
            .with_private_file(&private);

        let first = loader.get_config_with(options.clone()).unwrap();
        fs::write(&public, "{\"a\": 99}").unwrap();
        let second = loader.get_config_with(options).unwrap();

        assert_eq!(second.get("a"), Some(&json!(1)));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_private_files_are_distinct_entries() {
        let dir = TempDir::new().unwrap();
        let public = write_json(&dir, "a.json", &json!({"x": 1}));
        let private_b = write_json(&dir, "b.json", &json!({"y": 2}));
        let private_c = write_json(&dir, "c.json", &json!({"y": 3}));

        let mut loader = ConfigLoader::new();
        let from_b = loader
            .get_config_with(
                ConfigOptions::new()
                    .with_public_file(&public)
                    .with_private_file(&private_b),
            )
            .unwrap();
        let from_c = loader
            .get_config_with(
                ConfigOptions::new()
                    .with_public_file(&public)
                    .with_private_file(&private_c),
            )
            .unwrap();

        assert!(!Arc::ptr_eq(&from_b, &from_c));
        assert_eq!(from_b.get("y"), Some(&json!(2)));
        assert_eq!(from_c.get("y"), Some(&json!(3)));
    }

    #[test]
    fn test_private_overrides_public() {
        let dir = TempDir::new().unwrap();
        let public = write_json(
            &dir,
            "public.json",
            &json!({"db": {"host": "h1", "port": 5432}, "debug": false}),
        );
        let private = write_json(&dir, "private.json", &json!({"db": {"host": "h2"}}));

        let mut loader = ConfigLoader::new();
        let config = loader
            .get_config_with(
                ConfigOptions::new()
                    .with_public_file(&public)
                    .with_private_file(&private),
            )
            .unwrap();

        assert_eq!(
            Value::Object(config.as_map().clone()),
            json!({"db": {"host": "h2", "port": 5432}, "debug": false})
        );
    }

    #[test]
    fn test_explicit_env_builds_conventional_filename() {
        let mut loader = ConfigLoader::new();

        let result = loader.get_config_with(ConfigOptions::new().with_env("nosuchenv"));

        match result {
            Err(ConfigError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("config_public_nosuchenv.json"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public.json");
        let private = dir.path().join("private.json");

        let mut loader = ConfigLoader::new();
        let options = ConfigOptions::new()
            .with_public_file(&public)
            .with_private_file(&private);

        assert!(loader.get_config_with(options.clone()).is_err());

        fs::write(&public, "{\"a\": 1}").unwrap();
        fs::write(&private, "{}").unwrap();

        let config = loader.get_config_with(options).unwrap();
        assert_eq!(config.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_varname_accessors() {
        let mut loader = ConfigLoader::new();
        assert_eq!(loader.env_varname(), "EV_ENV");

        loader.set_env_varname("APP_ENV");
        assert_eq!(loader.env_varname(), "APP_ENV");
    }
}
