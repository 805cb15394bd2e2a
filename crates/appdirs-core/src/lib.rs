//! Per-user application directories for Windows, macOS and UNIX-like systems.
//!
//! Given an [`Application`] identity and a target [`Platform`], computes where
//! the application should keep its data, configuration, cache and log files.
//! Nothing is created on disk; callers get path strings joined with the
//! separator of the platform they asked about.
//!
//! ```
//! use std::ffi::OsString;
//!
//! use appdirs_core::{Application, DirResolver, EnvProvider, Platform};
//!
//! struct FixedHome;
//!
//! impl EnvProvider for FixedHome {
//!     fn get(&self, key: &str) -> Option<OsString> {
//!         (key == "HOME").then(|| OsString::from("/home/user"))
//!     }
//!
//!     fn os_name(&self) -> String {
//!         "linux".to_string()
//!     }
//! }
//!
//! let resolver = DirResolver::new(&FixedHome);
//! let app = Application::new("App");
//!
//! let config = resolver
//!     .user_config(&app, Some(Platform::from_identifier("linux")))
//!     .unwrap();
//! assert_eq!(config, "/home/user/.config/App");
//! ```
//!
//! # Design
//!
//! - Environment variables and the host OS are read through [`EnvProvider`],
//!   never directly, so any platform can be resolved from any host
//! - Resolvers are pure: no caching, every call re-reads the environment
//! - Only required variables (`HOME`, `APPDATA`) can produce a [`DirsError`]

#![deny(unused_crate_dependencies)]

mod base;
mod env;
mod error;
mod identity;
mod kind;
mod platform;
mod resolved;
mod resolver;

// Error type
pub use error::{DirsError, DirsResult};

// Identity and options
pub use identity::Application;
pub use resolver::AppDirOptions;

// Platform and environment seams
pub use env::{EnvProvider, SystemEnv};
pub use platform::{MACOSX, Platform, WINDOWS, resolve_platform};

#[cfg(any(test, feature = "test-utils"))]
pub use env::MockEnv;

// Directory kinds
pub use kind::{DirKind, ParseDirKindError};

// Resolvers
pub use resolver::{
    DirResolver, app_dir, cache_base_dir, config_base_dir, data_base_dir, logs_base_dir,
    user_cache_dir, user_cache_dir_for, user_config_dir, user_config_dir_for, user_data_dir,
    user_data_dir_for, user_logs_dir, user_logs_dir_for,
};

// Snapshot for CLI and diagnostics
pub use resolved::ResolvedDirs;
