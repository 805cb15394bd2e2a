//! Platform identification and platform-native path joining.
//!
//! Resolution rules only distinguish three families: Windows, macOS, and
//! everything else, which is assumed to behave like a UNIX variant exposing
//! XDG-style environment variables.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::env::EnvProvider;

/// Identifier that selects the Windows rules.
pub const WINDOWS: &str = "windows";

/// Identifier that selects the macOS rules.
pub const MACOSX: &str = "macosx";

/// Target platform family for directory resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOsX,
    /// Any other system, keeping the identifier it was parsed from.
    Unix(String),
}

impl Platform {
    /// Map a platform identifier onto a family.
    ///
    /// Only the exact identifiers `"windows"` and `"macosx"` are special;
    /// every other value, including the empty string, is UNIX-like.
    pub fn from_identifier(id: &str) -> Self {
        match id {
            WINDOWS => Self::Windows,
            MACOSX => Self::MacOsX,
            other => Self::Unix(other.to_string()),
        }
    }

    /// Map a `std::env::consts::OS` style name onto a family.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "macos" => Self::MacOsX,
            other => Self::from_identifier(other),
        }
    }

    /// The platform this process is running on.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Identifier string for this platform.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Windows => WINDOWS,
            Self::MacOsX => MACOSX,
            Self::Unix(id) => id,
        }
    }

    pub const fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Native path separator of this platform family.
    pub const fn separator(&self) -> char {
        match self {
            Self::Windows => '\\',
            Self::MacOsX | Self::Unix(_) => '/',
        }
    }

    /// Join `segments` onto `base` with this platform's separator.
    ///
    /// A base that already ends in a separator does not get a second one.
    pub fn join<S: AsRef<str>>(&self, base: &str, segments: &[S]) -> String {
        let sep = self.separator();
        let mut path = base.to_string();
        for segment in segments {
            if !path.is_empty() && !path.ends_with(sep) {
                path.push(sep);
            }
            path.push_str(segment.as_ref());
        }
        path
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_identifier(s))
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

/// Pick the platform to resolve for.
///
/// Returns the explicit override when given, otherwise the OS reported by
/// `env`. Every resolver goes through here, which is what lets callers ask
/// for another platform's layout.
pub fn resolve_platform(explicit: Option<Platform>, env: &dyn EnvProvider) -> Platform {
    explicit.unwrap_or_else(|| Platform::from_os_name(&env.os_name()))
}
