//! Identity-independent base directories.
//!
//! | Kind   | Windows                                  | macOS                               | UNIX-like                              |
//! |--------|------------------------------------------|-------------------------------------|----------------------------------------|
//! | Data   | `LOCALAPPDATA` (non-roaming, if set), else `APPDATA` | `$HOME/Library/Application Support` | `$XDG_DATA_HOME` or `$HOME/.local/share` |
//! | Config | Data                                     | Data                                | `$XDG_CONFIG_HOME` or `$HOME/.config`  |
//! | Cache  | non-roaming Data                         | `$HOME/Library/Caches`              | `$XDG_CACHE_HOME` or `$HOME/.cache`    |
//! | Logs   | non-roaming Data                         | `$HOME/Library/Logs`                | Cache                                  |
//!
//! `XDG_*` overrides only count when non-blank.

use crate::env::{EnvProvider, lookup, non_blank, required};
use crate::error::DirsResult;
use crate::platform::Platform;

pub(crate) const HOME: &str = "HOME";
pub(crate) const APPDATA: &str = "APPDATA";
pub(crate) const LOCALAPPDATA: &str = "LOCALAPPDATA";
pub(crate) const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub(crate) const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub(crate) const XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";

/// `$HOME` joined with a fixed relative location.
fn under_home(env: &dyn EnvProvider, platform: &Platform, rest: &[&str]) -> DirsResult<String> {
    let home = required(env, HOME)?;
    Ok(platform.join(&home, rest))
}

/// XDG override if non-blank, otherwise `$HOME` plus the default location.
fn xdg_or_home(
    env: &dyn EnvProvider,
    platform: &Platform,
    var: &'static str,
    default: &[&str],
) -> DirsResult<String> {
    if let Some(value) = non_blank(env, var)? {
        return Ok(value);
    }
    tracing::debug!(var, "no override, falling back to $HOME default");
    under_home(env, platform, default)
}

/// On Windows a present `LOCALAPPDATA` wins for the non-roaming branch, even
/// when empty.
pub(crate) fn data_base(
    env: &dyn EnvProvider,
    roaming: bool,
    platform: &Platform,
) -> DirsResult<String> {
    match platform {
        Platform::Windows => {
            if !roaming {
                if let Some(local) = lookup(env, LOCALAPPDATA)? {
                    return Ok(local);
                }
                tracing::debug!("LOCALAPPDATA unset, using APPDATA");
            }
            required(env, APPDATA)
        }
        Platform::MacOsX => under_home(env, platform, &["Library", "Application Support"]),
        Platform::Unix(_) => xdg_or_home(env, platform, XDG_DATA_HOME, &[".local", "share"]),
    }
}

pub(crate) fn config_base(
    env: &dyn EnvProvider,
    roaming: bool,
    platform: &Platform,
) -> DirsResult<String> {
    match platform {
        Platform::Windows | Platform::MacOsX => data_base(env, roaming, platform),
        Platform::Unix(_) => xdg_or_home(env, platform, XDG_CONFIG_HOME, &[".config"]),
    }
}

pub(crate) fn cache_base(env: &dyn EnvProvider, platform: &Platform) -> DirsResult<String> {
    match platform {
        Platform::Windows => data_base(env, false, platform),
        Platform::MacOsX => under_home(env, platform, &["Library", "Caches"]),
        Platform::Unix(_) => xdg_or_home(env, platform, XDG_CACHE_HOME, &[".cache"]),
    }
}

pub(crate) fn logs_base(env: &dyn EnvProvider, platform: &Platform) -> DirsResult<String> {
    match platform {
        Platform::Windows => data_base(env, false, platform),
        Platform::MacOsX => under_home(env, platform, &["Library", "Logs"]),
        Platform::Unix(_) => cache_base(env, platform),
    }
}
