//! Logging init for the command-line binary: structured logs to stderr.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,crumbfetch=debug";

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter; `quiet`
/// lowers the default to warnings only.
pub fn init_logging(quiet: bool) {
    let fallback = if quiet { "warn" } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("crumbfetch logging initialized");
    }
}
