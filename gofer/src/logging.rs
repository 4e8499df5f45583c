//! Diagnostic logging to stderr.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive, e.g. `GOFER_LOG=gofer=trace`.
pub const LOG_ENV: &str = "GOFER_LOG";

/// Install the global subscriber. `GOFER_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
