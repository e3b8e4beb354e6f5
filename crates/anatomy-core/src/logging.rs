//! Tracing setup shared by the desktop app and the CLI.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a fmt subscriber. `RUST_LOG` takes precedence over `verbosity`.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
