//! Command-line arguments for the `appdirs` binary.

use appdirs_core::{AppDirOptions, Application, DirKind, Platform};
use clap::Parser;

/// Show where an application should keep its data, config, cache and logs.
///
/// Nothing is created on disk; the directories are only computed and printed.
#[derive(Parser, Debug)]
#[command(name = "appdirs")]
#[command(version)]
pub struct Cli {
    /// Application name
    pub name: String,

    /// Vendor directory used on Windows (defaults to the name)
    #[arg(long)]
    pub author: Option<String>,

    /// Version appended as the innermost directory
    #[arg(long = "app-version")]
    pub app_version: Option<String>,

    /// Use the roaming profile for Windows data and config
    #[arg(long)]
    pub roaming: bool,

    /// Resolve as if running on this platform (windows, macosx, or any other
    /// identifier for UNIX-like rules)
    #[arg(long, env = "APPDIRS_PLATFORM")]
    pub platform: Option<String>,

    /// Print only this directory (data, config, cache or logs)
    #[arg(long)]
    pub kind: Option<DirKind>,

    /// Do not append `Cache` to the Windows cache directory
    #[arg(long)]
    pub no_force_cache: bool,

    /// Do not append a logs subdirectory on Windows and UNIX-like systems
    #[arg(long)]
    pub no_force_logs: bool,

    /// Print JSON instead of `key = value` lines
    #[arg(long)]
    pub json: bool,

    /// Enable debug output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Explicit platform override, if one was given.
    pub fn platform(&self) -> Option<Platform> {
        self.platform.as_deref().map(Platform::from_identifier)
    }

    pub fn options(&self) -> AppDirOptions {
        AppDirOptions {
            author: self.author.clone(),
            version: self.app_version.clone(),
            roaming: self.roaming,
            force_cache: !self.no_force_cache,
            force_logs: !self.no_force_logs,
            platform: self.platform(),
        }
    }

    pub fn application(&self) -> Application {
        self.options().application(&self.name)
    }
}
