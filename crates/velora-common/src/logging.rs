//! Structured Logging Configuration
//!
//! The console is a client-side process, so logs go to the local console or
//! to a file collector on kiosk installs:
//! - JSON output when logs are shipped (LOG_FORMAT=json)
//! - Human-readable output for development (default)
//!
//! # Usage
//!
//! ```rust,ignore
//! use velora_common::logging::init_logging;
//!
//! fn main() {
//!     init_logging("velora-console");
//!
//!     tracing::info!("console starting");
//! }
//! ```
//!
//! Session tokens are never logged; events carry the account email and role
//! at most.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: "json" for JSON output, anything else for text (default: text)
//! - `RUST_LOG`: filter directives (default: info)
//!   Examples: `RUST_LOG=debug`, `RUST_LOG=velora_client=trace`

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize logging for the given process name.
///
/// `LOG_FORMAT` selects the output format, `RUST_LOG` the filter
/// (defaulting to `info`). Call once at process start.
pub fn init_logging(_service_name: &str) {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format.eq_ignore_ascii_case("json") {
        init_json_logging(env_filter);
    } else {
        init_text_logging(env_filter);
    }
}

/// One JSON object per event, for shipped logs.
fn init_json_logging(env_filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();
}

/// Compact text for a developer terminal.
fn init_text_logging(env_filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .init();
}

/// Initialize logging with defaults (uses "velora" as the process name).
pub fn init_default_logging() {
    init_logging("velora");
}
