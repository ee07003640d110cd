//! # Logging
//!
//! Structured logging for the controller and its embedder.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard alive
//! let _log_guard = finpulse::debug::init();
//!
//! tracing::info!(screen = "dashboard", "Screen changed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `finpulse=debug,info`)
//! - `FINPULSE_LOG_DIR`: Log directory (default: `logs`)
//! - `FINPULSE_LOG_STDERR`: Mirror log output to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::{init as init_logger, LogGuard};

/// Initialize logging from the environment
pub fn init() -> Option<LogGuard> {
    init_logger(&DebugConfig::from_env())
}
