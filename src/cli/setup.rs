//! Runtime setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warnings by default, then info,
/// debug, and trace.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over
/// the verbosity flag. Logs go to stderr so stdout stays clean for reports.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
