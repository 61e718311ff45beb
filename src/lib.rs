//! Environment-aware JSON configuration loading.
//!
//! An environment variable (`EV_ENV` by default) names the environment the
//! code is running in, falling back to `"dev"` when unset. Each environment
//! pairs two JSON files: a public one (`config_public_<env>.json`, checked
//! into source control) and a private one (`config_private.json`, kept out of
//! it). Keys in the private file override keys in the public file, with
//! nested objects merged recursively.
//!
//! ```no_run
//! use ev_config::ConfigLoader;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.get_config()?;
//! let debug = config.get("debug");
//! # Ok::<(), ev_config::ConfigError>(())
//! ```
//!
//! Loaded configurations are memoized per `(public_file, private_file)` pair
//! for the lifetime of the loader; repeated calls hand back the same
//! [`Config`] object without touching the filesystem again.

mod config;
mod env;
mod error;
mod file;
mod loader;
mod merge;

pub use config::Config;
pub use env::{EnvResolver, DEFAULT_ENV, DEFAULT_ENV_VARNAME};
pub use error::ConfigError;
pub use loader::{ConfigLoader, ConfigOptions};
pub use merge::deep_merge;
