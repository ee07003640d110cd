//! # Common Error Types
//!
//! Consolidated error handling for the FinPulse controller.
//!
//! The controller operations themselves never fail: missing or corrupt
//! persisted data degrades to defaults and failed writes are logged and
//! dropped. [`AppError`] is surfaced by the pieces around them:
//!
//! - **Storage**: key-value backend failures (I/O, unreadable store file)
//! - **Serialization**: JSON encoding/decoding of persisted values
//! - **State**: invalid state transitions requested by an embedder
//! - **Validation**: form-level input checks (see [`crate::utils::validation`])
//! - **Config**: malformed environment configuration
//!
//! ```rust
//! use finpulse::core::error::AppError;
//!
//! let err = AppError::Validation("Amount must be greater than 0".to_string());
//! assert_eq!(err.to_string(), "Validation error: Amount must be greater than 0");
//! ```

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable storage backend failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            AppError::Storage("disk full".into()).to_string(),
            "Storage error: disk full"
        );
        assert_eq!(AppError::State("x".into()).to_string(), "State error: x");
        assert_eq!(AppError::Config("x".into()).to_string(), "Config error: x");
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_env_error_converts_to_config() {
        let err: AppError = lib_utils::envs::Error::WrongFormat("FINPULSE_SPLASH_MS").into();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("FINPULSE_SPLASH_MS")));
    }
}
