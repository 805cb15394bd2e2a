//! Cross-platform properties of the public resolver API.
//!
//! Uses a local `EnvProvider` so nothing here depends on the host running
//! the tests.

use std::collections::HashMap;
use std::ffi::OsString;

use appdirs_core::{
    AppDirOptions, Application, DirKind, DirResolver, DirsError, EnvProvider, Platform,
    ResolvedDirs,
};

struct FakeEnv {
    os: &'static str,
    vars: HashMap<&'static str, &'static str>,
}

impl FakeEnv {
    fn new(os: &'static str, vars: &[(&'static str, &'static str)]) -> Self {
        Self {
            os,
            vars: vars.iter().copied().collect(),
        }
    }

    /// Every variable any platform might read.
    fn full() -> Self {
        Self::new(
            "linux",
            &[
                ("HOME", "/home/user"),
                ("APPDATA", r"C:\Users\u\AppData\Roaming"),
                ("LOCALAPPDATA", r"C:\Users\u\AppData\Local"),
            ],
        )
    }
}

impl EnvProvider for FakeEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).map(OsString::from)
    }

    fn os_name(&self) -> String {
        self.os.to_string()
    }
}

fn platforms() -> Vec<Platform> {
    vec![
        Platform::Windows,
        Platform::MacOsX,
        Platform::from_identifier("linux"),
        Platform::from_identifier("freebsd"),
    ]
}

fn identities() -> Vec<Application> {
    vec![
        Application::new("App"),
        Application::new("App").with_author("Auth"),
        Application::new("App").with_author("Auth").with_roaming(true),
        Application::new("App").with_version("2.0"),
        Application::new("App")
            .with_author("Auth")
            .with_version("2.0")
            .with_roaming(true),
    ]
}

/// Segments a path must end with, before any cache/logs literal.
fn identity_tail(app: &Application, platform: &Platform) -> String {
    if platform.is_windows() {
        platform.join(app.author(), &[app.name()])
    } else {
        app.name().to_string()
    }
}

#[test]
fn data_and_config_end_with_identity() {
    let env = FakeEnv::full();
    let resolver = DirResolver::new(&env);

    for platform in platforms() {
        for app in identities() {
            let mut tail = identity_tail(&app, &platform);
            if let Some(version) = app.version() {
                tail = platform.join(&tail, &[version]);
            }
            let tail = format!("{}{tail}", platform.separator());

            for kind in [DirKind::Data, DirKind::Config] {
                let path = resolver
                    .resolve(kind, &app, Some(platform.clone()))
                    .unwrap();
                assert!(!path.is_empty());
                assert!(
                    path.ends_with(&tail),
                    "{kind} on {platform}: {path} does not end with {tail}"
                );
            }
        }
    }
}

#[test]
fn every_kind_appends_version_last() {
    let env = FakeEnv::full();
    let resolver = DirResolver::new(&env);
    let app = Application::new("App").with_author("Auth").with_version("2.0");

    for platform in platforms() {
        let suffix = format!("{}2.0", platform.separator());
        for kind in DirKind::ALL {
            let path = resolver
                .resolve(kind, &app, Some(platform.clone()))
                .unwrap();
            assert!(path.ends_with(&suffix), "{kind} on {platform}: {path}");
        }
    }
}

#[test]
fn windows_cache_and_logs_never_roam() {
    let env = FakeEnv::full();
    let resolver = DirResolver::new(&env);
    let local = Application::new("App").with_author("Auth");
    let roaming = local.clone().with_roaming(true);

    for kind in [DirKind::Cache, DirKind::Logs] {
        let a = resolver
            .resolve(kind, &local, Some(Platform::Windows))
            .unwrap();
        let b = resolver
            .resolve(kind, &roaming, Some(Platform::Windows))
            .unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with(r"C:\Users\u\AppData\Local"));
    }
}

#[test]
fn windows_roaming_rule() {
    let app = Application::new("App").with_author("Auth");

    let env = FakeEnv::full();
    let resolver = DirResolver::new(&env);
    assert!(
        resolver
            .user_data(&app, Some(Platform::Windows))
            .unwrap()
            .starts_with(r"C:\Users\u\AppData\Local")
    );
    assert!(
        resolver
            .user_data(&app.clone().with_roaming(true), Some(Platform::Windows))
            .unwrap()
            .starts_with(r"C:\Users\u\AppData\Roaming")
    );

    let env = FakeEnv::new("windows", &[("APPDATA", r"C:\Users\u\AppData\Roaming")]);
    assert_eq!(
        DirResolver::new(&env).user_data(&app, None).unwrap(),
        r"C:\Users\u\AppData\Roaming\Auth\App"
    );
}

#[test]
fn xdg_override_precedence() {
    let app = Application::new("App");
    let linux = Some(Platform::from_identifier("linux"));

    let env = FakeEnv::new(
        "linux",
        &[("HOME", "/home/user"), ("XDG_DATA_HOME", "/srv/data")],
    );
    let resolver = DirResolver::new(&env);
    assert_eq!(
        resolver.user_data(&app, linux.clone()).unwrap(),
        "/srv/data/App"
    );
    // XDG_DATA_HOME has no say over config.
    assert_eq!(
        resolver.user_config(&app, linux.clone()).unwrap(),
        "/home/user/.config/App"
    );

    let env = FakeEnv::new("linux", &[("HOME", "/home/user"), ("XDG_DATA_HOME", "")]);
    assert_eq!(
        DirResolver::new(&env).user_data(&app, linux).unwrap(),
        "/home/user/.local/share/App"
    );
}

#[test]
fn base_directories_are_exposed() {
    let env = FakeEnv::full();
    let resolver = DirResolver::new(&env);

    assert_eq!(
        resolver.data_base(false, None).unwrap(),
        "/home/user/.local/share"
    );
    assert_eq!(resolver.config_base(false, None).unwrap(), "/home/user/.config");
    assert_eq!(resolver.cache_base(None).unwrap(), "/home/user/.cache");
    assert_eq!(resolver.logs_base(None).unwrap(), "/home/user/.cache");
    assert_eq!(
        resolver.logs_base(Some(Platform::MacOsX)).unwrap(),
        "/home/user/Library/Logs"
    );
    assert_eq!(
        resolver.config_base(true, Some(Platform::Windows)).unwrap(),
        r"C:\Users\u\AppData\Roaming"
    );
}

#[test]
fn missing_home_surfaces_as_error() {
    let env = FakeEnv::new("macos", &[]);
    let err = DirResolver::new(&env)
        .user_cache(&Application::new("App"), true, None)
        .unwrap_err();
    assert_eq!(err, DirsError::MissingVar { var: "HOME" });
}

#[test]
fn raw_fields_use_documented_defaults() {
    let env = FakeEnv::new("windows", &[("LOCALAPPDATA", r"C:\Local")]);
    let resolver = DirResolver::new(&env);
    let options = AppDirOptions::default();

    assert_eq!(
        resolver.user_data_for("App", &options).unwrap(),
        r"C:\Local\App\App"
    );
    assert_eq!(
        resolver.user_cache_for("App", &options).unwrap(),
        r"C:\Local\App\App\Cache"
    );
    assert_eq!(
        resolver.user_logs_for("App", &options).unwrap(),
        r"C:\Local\App\App\Logs"
    );
}

#[test]
fn snapshot_matches_individual_resolvers() {
    let env = FakeEnv::full();
    let resolver = DirResolver::new(&env);
    let app = Application::new("App").with_author("Auth").with_version("1");

    for platform in platforms() {
        let dirs = ResolvedDirs::resolve_with(&resolver, &app, Some(platform.clone())).unwrap();
        assert_eq!(dirs.platform, platform);
        for kind in DirKind::ALL {
            let expected = resolver
                .resolve(kind, &app, Some(platform.clone()))
                .unwrap();
            let actual = match kind {
                DirKind::Data => &dirs.data,
                DirKind::Config => &dirs.config,
                DirKind::Cache => &dirs.cache,
                DirKind::Logs => &dirs.logs,
            };
            assert_eq!(actual, &expected);
        }
    }
}

#[test]
fn free_functions_use_process_environment() {
    let app = Application::new("App");
    let platform = Some(Platform::Windows);
    let system = DirResolver::system();

    assert_eq!(
        appdirs_core::user_data_dir(&app, platform.clone()),
        system.user_data(&app, platform.clone())
    );
    assert_eq!(
        appdirs_core::app_dir(DirKind::Logs, &app, platform.clone()),
        system.user_logs(&app, true, platform.clone())
    );
    assert_eq!(
        appdirs_core::data_base_dir(true, platform.clone()),
        system.data_base(true, platform.clone())
    );
    assert_eq!(
        appdirs_core::user_cache_dir_for("App", &AppDirOptions::default()),
        system.user_cache_for("App", &AppDirOptions::default())
    );
    assert_eq!(
        ResolvedDirs::resolve(&app, platform.clone()),
        ResolvedDirs::resolve_with(&system, &app, platform)
    );
}
