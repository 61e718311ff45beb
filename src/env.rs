//! Environment-name resolution.

/// Name of the process environment variable consulted by default.
pub const DEFAULT_ENV_VARNAME: &str = "EV_ENV";

/// Environment assumed when the variable is unset.
pub const DEFAULT_ENV: &str = "dev";

/// Resolves the running environment's name from a process environment
/// variable.
///
/// The variable name is mutable state: changing it affects every later
/// [`resolve`](Self::resolve) call, but never configurations that were
/// already loaded.
#[derive(Debug, Clone)]
pub struct EnvResolver {
    varname: String,
}

impl Default for EnvResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_VARNAME)
    }
}

impl EnvResolver {
    /// Creates a resolver reading the given environment variable.
    pub fn new(varname: impl Into<String>) -> Self {
        Self {
            varname: varname.into(),
        }
    }

    /// Returns the environment variable name currently consulted.
    pub fn varname(&self) -> &str {
        &self.varname
    }

    /// Replaces the environment variable name consulted by future
    /// [`resolve`](Self::resolve) calls.
    pub fn set_varname(&mut self, varname: impl Into<String>) {
        self.varname = varname.into();
    }

    /// Returns the environment name.
    ///
    /// This is the variable's value when it is set, the empty string
    /// included, and `"dev"` otherwise.
    pub fn resolve(&self) -> String {
        std::env::var(&self.varname).unwrap_or_else(|_| DEFAULT_ENV.to_string())
    }
}
