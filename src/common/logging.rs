//! Logging and tracing configuration
//!
//! Everything goes to stderr. Stdout is reserved for the per-test report
//! lines so the report stays byte-identical whatever the log level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a given `-v` count
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "sst_regress=warn,warn",
        1 => "sst_regress=info,warn",
        _ => "sst_regress=debug,info",
    }
}

/// Initialize tracing for the CLI
///
/// Logs are controlled by the `RUST_LOG` environment variable, falling back
/// to a filter derived from the number of `-v` flags.
pub fn init_cli(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
