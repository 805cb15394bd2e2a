//! CLI entry point.

use clap::Parser;

use appdirs_cli::{Cli, handlers};

/// Install the stderr subscriber.
///
/// Level comes from `RUST_LOG` (default: warn); `--verbose` raises the
/// default to debug. Stdout stays reserved for the resolved paths.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    handlers::paths::execute(&cli)
}
