//! Directory resolution error types.
//!
//! Optional overrides (`XDG_*`, `LOCALAPPDATA`) being absent is normal input
//! and never produces an error. Only variables a platform cannot do without
//! surface here.

use thiserror::Error;

/// Errors that can occur while resolving a directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirsError {
    /// A required environment variable (e.g. `HOME`, `APPDATA`) is not set.
    #[error("Environment variable {var} is not set")]
    MissingVar { var: &'static str },

    /// An environment variable is set but does not hold valid UTF-8.
    #[error("Environment variable {var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

/// Result type for directory resolution.
pub type DirsResult<T> = Result<T, DirsError>;
