//! Logger configuration for the `machine-name` CLI.
//!
//! stdout carries the generated name and nothing else, so all logs go to
//! stderr.

use std::{io, str::FromStr};

use tracing::Level;
use tracing_subscriber::{
    filter::Targets,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

/// The log level used when `RUST_LOG` is unset or can't be parsed.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Initialize a global `tracing` logger.
///
/// + The logger will print enabled `tracing` events and spans to stderr.
/// + The default log level includes WARN and ERROR events.
/// + You can change the log level or module filtering with an appropriate
///   `RUST_LOG` env var set. Read more about the syntax here:
///   <https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/targets/struct.Targets.html>
///
/// Panics if a logger is already initialized. This will fail if used in tests,
/// since multiple test threads will compete to set the global logger.
pub fn init() {
    try_init().expect("Failed to setup logger");
}

/// Use this to initialize the global logger in tests.
pub fn init_for_testing() {
    // Quickly skip logger setup if no env var set.
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    // Don't panic if there's already a logger setup. Multiple tests might try
    // setting the global logger.
    let _ = try_init();
}

/// Try to initialize a global logger. Will return an `Err` if there is another
/// global logger already set.
pub fn try_init() -> Result<(), TryInitError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = targets_filter(rust_log.as_deref());

    let stderr_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_level(true)
        .with_target(true)
        .with_ansi(io::IsTerminal::is_terminal(&io::stderr()))
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).try_init()
}

/// Parse a `RUST_LOG`-style targets filter, falling back to [`DEFAULT_LEVEL`]
/// if it's missing or malformed.
fn targets_filter(rust_log: Option<&str>) -> Targets {
    rust_log
        .and_then(|rust_log| Targets::from_str(rust_log).ok())
        .unwrap_or_else(|| Targets::new().with_default(DEFAULT_LEVEL))
}
