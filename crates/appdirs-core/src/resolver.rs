//! Per-application directory resolution.
//!
//! [`DirResolver`] layers an [`Application`] onto the base directories:
//!
//! 1. Start from the base for the kind (Data and Config honor the roaming
//!    flag, Cache and Logs always use the local branch).
//! 2. Append `author` then `name` on Windows, only `name` elsewhere.
//! 3. Cache and Logs may append a literal subdirectory (see
//!    [`DirResolver::user_cache`] and [`DirResolver::user_logs`]).
//! 4. Append `version` last when the identity has one.
//!
//! The free functions at the bottom of this module use the real process
//! environment. Build a [`DirResolver`] over a different [`EnvProvider`] to
//! resolve against anything else.

use crate::base;
use crate::env::{EnvProvider, SystemEnv};
use crate::error::DirsResult;
use crate::identity::Application;
use crate::kind::DirKind;
use crate::platform::{Platform, resolve_platform};

/// Subdirectory forced under the Windows app directory for caches.
const WINDOWS_CACHE_SEGMENT: &str = "Cache";
/// Subdirectory forced under the Windows app directory for logs.
const WINDOWS_LOGS_SEGMENT: &str = "Logs";
/// Subdirectory forced under the UNIX-like cache directory for logs.
const UNIX_LOGS_SEGMENT: &str = "logs";

/// Raw identity fields plus per-call flags, for callers that do not keep an
/// [`Application`] around.
///
/// Defaults: no author (the name is used), no version, roaming off, both
/// force flags on, ambient platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirOptions {
    pub author: Option<String>,
    pub version: Option<String>,
    pub roaming: bool,
    /// Append `Cache` on Windows.
    pub force_cache: bool,
    /// Append `Logs` on Windows and `logs` on UNIX-like systems.
    pub force_logs: bool,
    /// Platform to resolve for; `None` means the running OS.
    pub platform: Option<Platform>,
}

impl Default for AppDirOptions {
    fn default() -> Self {
        Self {
            author: None,
            version: None,
            roaming: false,
            force_cache: true,
            force_logs: true,
            platform: None,
        }
    }
}

impl AppDirOptions {
    /// Build the identity these options describe.
    pub fn application(&self, name: &str) -> Application {
        let mut app = Application::new(name).with_roaming(self.roaming);
        if let Some(author) = &self.author {
            app = app.with_author(author.as_str());
        }
        if let Some(version) = &self.version {
            app = app.with_version(version.as_str());
        }
        app
    }
}

/// Resolves directories against an injected environment.
#[derive(Clone, Copy)]
pub struct DirResolver<'a> {
    env: &'a dyn EnvProvider,
}

impl std::fmt::Debug for DirResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirResolver")
            .field("os", &self.env.os_name())
            .finish_non_exhaustive()
    }
}

impl<'a> DirResolver<'a> {
    pub const fn new(env: &'a dyn EnvProvider) -> Self {
        Self { env }
    }

    /// Resolver over the real process environment.
    pub fn system() -> DirResolver<'static> {
        DirResolver::new(&SystemEnv)
    }

    /// The platform a call with `explicit` would resolve for.
    pub fn platform(&self, explicit: Option<Platform>) -> Platform {
        resolve_platform(explicit, self.env)
    }

    // Base directories

    pub fn data_base(&self, roaming: bool, platform: Option<Platform>) -> DirsResult<String> {
        base::data_base(self.env, roaming, &self.platform(platform))
    }

    pub fn config_base(&self, roaming: bool, platform: Option<Platform>) -> DirsResult<String> {
        base::config_base(self.env, roaming, &self.platform(platform))
    }

    pub fn cache_base(&self, platform: Option<Platform>) -> DirsResult<String> {
        base::cache_base(self.env, &self.platform(platform))
    }

    pub fn logs_base(&self, platform: Option<Platform>) -> DirsResult<String> {
        base::logs_base(self.env, &self.platform(platform))
    }

    // Application directories

    pub fn user_data(&self, app: &Application, platform: Option<Platform>) -> DirsResult<String> {
        let platform = self.platform(platform);
        let base = base::data_base(self.env, app.roaming(), &platform)?;
        Ok(app_path(&platform, &base, app, None))
    }

    pub fn user_config(
        &self,
        app: &Application,
        platform: Option<Platform>,
    ) -> DirsResult<String> {
        let platform = self.platform(platform);
        let base = base::config_base(self.env, app.roaming(), &platform)?;
        Ok(app_path(&platform, &base, app, None))
    }

    /// Cache directory, ignoring the identity's roaming flag.
    ///
    /// Windows has no cache convention, so with `force_cache` a `Cache`
    /// subdirectory is carved out of the local app data directory. Without
    /// it the app data directory itself is returned. Other platforms ignore
    /// the flag.
    pub fn user_cache(
        &self,
        app: &Application,
        force_cache: bool,
        platform: Option<Platform>,
    ) -> DirsResult<String> {
        let platform = self.platform(platform);
        let base = base::cache_base(self.env, &platform)?;
        let extra = (force_cache && platform.is_windows()).then_some(WINDOWS_CACHE_SEGMENT);
        Ok(app_path(&platform, &base, app, extra))
    }

    /// Logs directory, ignoring the identity's roaming flag.
    ///
    /// `force_logs` appends `Logs` on Windows and `logs` on UNIX-like
    /// systems. macOS already has `~/Library/Logs` and never gets one.
    pub fn user_logs(
        &self,
        app: &Application,
        force_logs: bool,
        platform: Option<Platform>,
    ) -> DirsResult<String> {
        let platform = self.platform(platform);
        let base = base::logs_base(self.env, &platform)?;
        let extra = match &platform {
            _ if !force_logs => None,
            Platform::Windows => Some(WINDOWS_LOGS_SEGMENT),
            Platform::Unix(_) => Some(UNIX_LOGS_SEGMENT),
            Platform::MacOsX => None,
        };
        Ok(app_path(&platform, &base, app, extra))
    }

    /// Resolve `kind` with both force flags on.
    pub fn resolve(
        &self,
        kind: DirKind,
        app: &Application,
        platform: Option<Platform>,
    ) -> DirsResult<String> {
        match kind {
            DirKind::Data => self.user_data(app, platform),
            DirKind::Config => self.user_config(app, platform),
            DirKind::Cache => self.user_cache(app, true, platform),
            DirKind::Logs => self.user_logs(app, true, platform),
        }
    }

    // Raw-field variants

    pub fn user_data_for(&self, name: &str, options: &AppDirOptions) -> DirsResult<String> {
        self.user_data(&options.application(name), options.platform.clone())
    }

    pub fn user_config_for(&self, name: &str, options: &AppDirOptions) -> DirsResult<String> {
        self.user_config(&options.application(name), options.platform.clone())
    }

    pub fn user_cache_for(&self, name: &str, options: &AppDirOptions) -> DirsResult<String> {
        self.user_cache(
            &options.application(name),
            options.force_cache,
            options.platform.clone(),
        )
    }

    pub fn user_logs_for(&self, name: &str, options: &AppDirOptions) -> DirsResult<String> {
        self.user_logs(
            &options.application(name),
            options.force_logs,
            options.platform.clone(),
        )
    }
}

/// Compose `base / [author /] name [/ extra] [/ version]`.
fn app_path(platform: &Platform, base: &str, app: &Application, extra: Option<&str>) -> String {
    let mut segments = Vec::with_capacity(4);
    if platform.is_windows() {
        segments.push(app.author());
    }
    segments.push(app.name());
    segments.extend(extra);
    segments.extend(app.version());

    let path = platform.join(base, segments.as_slice());
    tracing::trace!(%platform, app = app.name(), %path, "resolved directory");
    path
}

/// Data directory for `app` in the process environment.
pub fn user_data_dir(app: &Application, platform: Option<Platform>) -> DirsResult<String> {
    DirResolver::system().user_data(app, platform)
}

/// Config directory for `app` in the process environment.
pub fn user_config_dir(app: &Application, platform: Option<Platform>) -> DirsResult<String> {
    DirResolver::system().user_config(app, platform)
}

/// Cache directory for `app` in the process environment.
pub fn user_cache_dir(
    app: &Application,
    force_cache: bool,
    platform: Option<Platform>,
) -> DirsResult<String> {
    DirResolver::system().user_cache(app, force_cache, platform)
}

/// Logs directory for `app` in the process environment.
pub fn user_logs_dir(
    app: &Application,
    force_logs: bool,
    platform: Option<Platform>,
) -> DirsResult<String> {
    DirResolver::system().user_logs(app, force_logs, platform)
}

/// Directory of `kind` for `app` in the process environment.
pub fn app_dir(kind: DirKind, app: &Application, platform: Option<Platform>) -> DirsResult<String> {
    DirResolver::system().resolve(kind, app, platform)
}

pub fn user_data_dir_for(name: &str, options: &AppDirOptions) -> DirsResult<String> {
    DirResolver::system().user_data_for(name, options)
}

pub fn user_config_dir_for(name: &str, options: &AppDirOptions) -> DirsResult<String> {
    DirResolver::system().user_config_for(name, options)
}

pub fn user_cache_dir_for(name: &str, options: &AppDirOptions) -> DirsResult<String> {
    DirResolver::system().user_cache_for(name, options)
}

pub fn user_logs_dir_for(name: &str, options: &AppDirOptions) -> DirsResult<String> {
    DirResolver::system().user_logs_for(name, options)
}

/// Generic data directory in the process environment.
pub fn data_base_dir(roaming: bool, platform: Option<Platform>) -> DirsResult<String> {
    DirResolver::system().data_base(roaming, platform)
}

/// Generic config directory in the process environment.
pub fn config_base_dir(roaming: bool, platform: Option<Platform>) -> DirsResult<String> {
    DirResolver::system().config_base(roaming, platform)
}

/// Generic cache directory in the process environment.
pub fn cache_base_dir(platform: Option<Platform>) -> DirsResult<String> {
    DirResolver::system().cache_base(platform)
}

/// Generic logs directory in the process environment.
pub fn logs_base_dir(platform: Option<Platform>) -> DirsResult<String> {
    DirResolver::system().logs_base(platform)
}
