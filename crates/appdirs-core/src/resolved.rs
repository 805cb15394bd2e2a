//! Snapshot of every directory for one application.
//!
//! Captures all four kinds in a single call so they can be compared,
//! printed by the `appdirs` CLI, or serialized for other tools.

use serde::Serialize;

use crate::env::EnvProvider;
use crate::error::DirsResult;
use crate::identity::Application;
use crate::platform::Platform;
use crate::resolver::{AppDirOptions, DirResolver};

/// All directories of an application, resolved for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDirs {
    /// Platform the directories were resolved for
    pub platform: Platform,
    pub data: String,
    pub config: String,
    pub cache: String,
    pub logs: String,
}

impl ResolvedDirs {
    /// Resolve all directories using the current process environment.
    pub fn resolve(app: &Application, platform: Option<Platform>) -> DirsResult<Self> {
        Self::resolve_with(&DirResolver::system(), app, platform)
    }

    /// Resolve all directories against an injected environment.
    pub fn resolve_with_env(
        env: &dyn EnvProvider,
        app: &Application,
        platform: Option<Platform>,
    ) -> DirsResult<Self> {
        Self::resolve_with(&DirResolver::new(env), app, platform)
    }

    /// Resolve with both force flags on.
    pub fn resolve_with(
        resolver: &DirResolver<'_>,
        app: &Application,
        platform: Option<Platform>,
    ) -> DirsResult<Self> {
        Self::resolve_flags(resolver, app, true, true, platform)
    }

    /// Resolve from raw identity fields, honoring the options' force flags
    /// and platform.
    pub fn resolve_with_options(
        resolver: &DirResolver<'_>,
        name: &str,
        options: &AppDirOptions,
    ) -> DirsResult<Self> {
        Self::resolve_flags(
            resolver,
            &options.application(name),
            options.force_cache,
            options.force_logs,
            options.platform.clone(),
        )
    }

    /// The platform is pinned once up front so all four entries agree even
    /// if the ambient OS answer could change between calls.
    fn resolve_flags(
        resolver: &DirResolver<'_>,
        app: &Application,
        force_cache: bool,
        force_logs: bool,
        platform: Option<Platform>,
    ) -> DirsResult<Self> {
        let platform = resolver.platform(platform);

        Ok(Self {
            data: resolver.user_data(app, Some(platform.clone()))?,
            config: resolver.user_config(app, Some(platform.clone()))?,
            cache: resolver.user_cache(app, force_cache, Some(platform.clone()))?,
            logs: resolver.user_logs(app, force_logs, Some(platform.clone()))?,
            platform,
        })
    }
}

impl std::fmt::Display for ResolvedDirs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "platform = {}", self.platform)?;
        writeln!(f, "data = {}", self.data)?;
        writeln!(f, "config = {}", self.config)?;
        writeln!(f, "cache = {}", self.cache)?;
        write!(f, "logs = {}", self.logs)
    }
}
