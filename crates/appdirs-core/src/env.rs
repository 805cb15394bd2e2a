//! Environment provider trait for testable directory resolution.
//!
//! Every resolver reads the process environment and the host OS identifier
//! through [`EnvProvider`], so tests can answer "what would this return on
//! Windows with `LOCALAPPDATA` unset?" without touching real process state.

use std::ffi::OsString;

use crate::error::{DirsError, DirsResult};

/// Trait for accessing ambient process state (injectable for testing).
pub trait EnvProvider: Send + Sync {
    /// Get an environment variable.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Identifier of the operating system the process runs on.
    ///
    /// Uses the `std::env::consts::OS` vocabulary (`"windows"`, `"macos"`,
    /// `"linux"`, ...).
    fn os_name(&self) -> String;
}

/// Production environment provider that reads from the actual process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

/// Test/mock environment provider with predefined variables.
///
/// Reports `"linux"` as the host OS unless told otherwise.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
pub struct MockEnv {
    os: String,
    vars: std::collections::HashMap<String, OsString>,
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for MockEnv {
    fn default() -> Self {
        Self {
            os: "linux".to_string(),
            vars: std::collections::HashMap::new(),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn os_name(&self) -> String {
        self.os.clone()
    }
}

/// Read a variable as UTF-8, treating absence as `None`.
pub(crate) fn lookup(env: &dyn EnvProvider, var: &'static str) -> DirsResult<Option<String>> {
    env.get(var)
        .map(|value| value.into_string().map_err(|_| DirsError::NotUnicode { var }))
        .transpose()
}

/// Read a variable that the current platform cannot do without.
pub(crate) fn required(env: &dyn EnvProvider, var: &'static str) -> DirsResult<String> {
    lookup(env, var)?.ok_or(DirsError::MissingVar { var })
}

/// Read an override variable; empty or whitespace-only values count as unset.
///
/// Surrounding whitespace is stripped from the returned value.
pub(crate) fn non_blank(env: &dyn EnvProvider, var: &'static str) -> DirsResult<Option<String>> {
    let value = lookup(env, var)?;
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(Some(v.to_string())),
        Some(_) => {
            tracing::debug!(var, "ignoring blank override");
            Ok(None)
        }
        None => Ok(None),
    }
}
