//! Logging setup for the CLI.

use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Explicit `-v`/`-q` flags take precedence; otherwise `RUST_LOG` is
/// honored, falling back to warnings only.
pub fn init_logging(verbosity: &Verbosity<WarnLevel>) {
    let filter = if verbosity.is_present() {
        EnvFilter::default().add_directive(verbosity.tracing_level_filter().into())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
