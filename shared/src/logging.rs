//! Shared logging utilities for consistent tracing across the engine and CLI

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::types::Panel;

/// Build the filter directive for the engine crates at the given base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("engine={base_level},bioage={base_level},shared={base_level}")
}

/// Initialize tracing subscriber with an optional log level
///
/// `RUST_LOG` takes precedence over the supplied level when set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    // Ignore the error when a subscriber is already installed (tests, embedding callers)
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize tracing subscriber at the default `info` level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for panel-aware info logging
#[macro_export]
macro_rules! panel_info {
    ($panel:expr, $($arg:tt)*) => {
        tracing::info!(
            panel = %$panel,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for panel-aware warning logging
#[macro_export]
macro_rules! panel_warn {
    ($panel:expr, $($arg:tt)*) => {
        tracing::warn!(
            panel = %$panel,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for panel-aware debug logging
#[macro_export]
macro_rules! panel_debug {
    ($panel:expr, $($arg:tt)*) => {
        tracing::debug!(
            panel = %$panel,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for a finished calculation
pub fn log_calculation(panel: Panel, biological_age: f64, differential_age: f64, contributing: usize) {
    info!(
        panel = %panel,
        timestamp = format_timestamp(),
        "✅ {} biological age {} (differential {}) from {} biomarker(s)",
        panel,
        biological_age,
        differential_age,
        contributing
    );
}
