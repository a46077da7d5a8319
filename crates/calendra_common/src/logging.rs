//! Logging utilities for Calendra.
//!
//! A single place that installs the `tracing` subscriber so every binary and
//! test harness logs the same way.

use calendra_config::LoggingConfig;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber from the `[logging]` config section.
///
/// Unknown level names fall back to INFO.
pub fn init_from_config(config: &LoggingConfig) {
    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);
    init_with_level(level);
}

const LOG_TARGETS: [&str; 6] = [
    "calendra_backend",
    "calendra_common",
    "calendra_db",
    "calendra_event_types",
    "calendra_slots",
    "tower_http",
];

/// Builds the filter: `rust_log` when given, otherwise `level` for every
/// Calendra crate and for request tracing.
fn build_filter(rust_log: Option<&str>, level: Level) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::new(directives);
    }
    let mut filter = EnvFilter::new("warn");
    for target in LOG_TARGETS {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Initialize the tracing subscriber with a specific log level.
///
/// A non-empty `RUST_LOG` replaces the level entirely.
/// Calling this twice is harmless: the second `try_init` simply fails.
pub fn init_with_level(level: Level) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), level);

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can sit in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
