//! Directory kinds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The four kinds of per-user directory an application can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirKind {
    Data,
    Config,
    Cache,
    Logs,
}

impl DirKind {
    pub const ALL: [Self; 4] = [Self::Data, Self::Config, Self::Cache, Self::Logs];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Config => "config",
            Self::Cache => "cache",
            Self::Logs => "logs",
        }
    }
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known directory kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown directory kind '{0}' (expected data, config, cache or logs)")]
pub struct ParseDirKindError(String);

impl FromStr for DirKind {
    type Err = ParseDirKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirKindError(s.to_string()))
    }
}
