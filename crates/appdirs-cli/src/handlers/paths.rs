//! Paths command handler.
//!
//! Prints the resolved directories for diagnostics. This is the tool to
//! reach for when an application writes files somewhere unexpected.

use anyhow::{Context, Result};
use appdirs_core::{DirKind, DirResolver, ResolvedDirs};

use crate::parser::Cli;

/// Execute the paths command against the real process environment.
pub fn execute(cli: &Cli) -> Result<()> {
    let output = render(cli, &DirResolver::system())?;
    println!("{output}");
    Ok(())
}

/// Build the text `execute` prints.
///
/// With `--kind` only that directory is rendered, otherwise all four plus
/// the platform they were resolved for.
pub fn render(cli: &Cli, resolver: &DirResolver<'_>) -> Result<String> {
    let options = cli.options();
    let platform = resolver.platform(options.platform.clone());
    tracing::debug!(name = %cli.name, %platform, "resolving directories");

    let Some(kind) = cli.kind else {
        let dirs = ResolvedDirs::resolve_with_options(resolver, &cli.name, &options)
            .context("Failed to resolve application directories")?;
        return if cli.json {
            serde_json::to_string_pretty(&dirs).context("Failed to encode directories")
        } else {
            Ok(dirs.to_string())
        };
    };

    let path = match kind {
        DirKind::Data => resolver.user_data_for(&cli.name, &options),
        DirKind::Config => resolver.user_config_for(&cli.name, &options),
        DirKind::Cache => resolver.user_cache_for(&cli.name, &options),
        DirKind::Logs => resolver.user_logs_for(&cli.name, &options),
    }
    .with_context(|| format!("Failed to resolve {kind} directory"))?;

    if cli.json {
        let value = serde_json::json!({ "kind": kind, "platform": platform, "path": path });
        serde_json::to_string_pretty(&value).context("Failed to encode directory")
    } else {
        Ok(path)
    }
}
