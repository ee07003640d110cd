//! # Utilities Library
//!
//! Shared utility functions for environment variables, calendar dates, and validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_flag, get_env_parse};
pub use time::{now_utc, parse_iso_date, today_iso};
pub use validation::{validate_email, validate_min_length, validate_not_empty, validate_positive};
