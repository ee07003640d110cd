//! # Application Configuration
//!
//! Controller settings, loaded from environment variables with defaults.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `FINPULSE_SPLASH_MS` | Splash screen duration in milliseconds | `3000` |
//! | `FINPULSE_STORAGE_PATH` | JSON file for persisted session/theme | unset (in-memory) |
//! | `FINPULSE_SEED_SAMPLES` | Start the ledger with sample expenses | `true` |

use crate::core::error::{AppError, Result};
use crate::core::service::KeyValueStore;
use crate::services::storage::{FileStore, MemoryStore};
use lib_utils::envs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default splash duration.
pub const DEFAULT_SPLASH_MS: u64 = 3000;

/// Longest splash accepted by [`AppConfig::validate`].
pub const MAX_SPLASH_MS: u64 = 60_000;

/// Controller configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// How long the splash screen stays up
    pub splash_duration: Duration,
    /// Where session and theme are persisted; `None` keeps them in memory
    pub storage_path: Option<PathBuf>,
    /// Start the ledger with the sample records
    pub seed_sample_expenses: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_duration: Duration::from_millis(DEFAULT_SPLASH_MS),
            storage_path: None,
            seed_sample_expenses: true,
        }
    }
}

/// Unset variables fall back to the default; malformed ones are errors.
fn optional<T>(value: std::result::Result<T, envs::Error>) -> Result<Option<T>> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_missing() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let splash_duration = optional(envs::get_env_parse::<u64>("FINPULSE_SPLASH_MS"))?
            .map(Duration::from_millis)
            .unwrap_or(defaults.splash_duration);

        let storage_path = optional(envs::get_env("FINPULSE_STORAGE_PATH"))?
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let seed_sample_expenses = optional(envs::get_env_flag("FINPULSE_SEED_SAMPLES"))?
            .unwrap_or(defaults.seed_sample_expenses);

        let config = Self {
            splash_duration,
            storage_path,
            seed_sample_expenses,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.splash_duration > Duration::from_millis(MAX_SPLASH_MS) {
            return Err(AppError::Config(format!(
                "FINPULSE_SPLASH_MS must be at most {} ms",
                MAX_SPLASH_MS
            )));
        }
        Ok(())
    }

    /// Open the configured storage backend.
    pub fn open_store(&self) -> Arc<dyn KeyValueStore> {
        match &self.storage_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using file-backed storage");
                Arc::new(FileStore::new(path))
            }
            None => {
                tracing::info!("Using in-memory storage");
                Arc::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.splash_duration, Duration::from_secs(3));
        assert!(config.storage_path.is_none());
        assert!(config.seed_sample_expenses);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_splash() {
        let config = AppConfig {
            splash_duration: Duration::from_secs(120),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    // The only test touching these variables, so the steps run in sequence.
    #[test]
    fn test_from_env_reads_variables() {
        std::env::set_var("FINPULSE_SPLASH_MS", "1234");
        std::env::set_var("FINPULSE_SEED_SAMPLES", "off");
        std::env::set_var("FINPULSE_STORAGE_PATH", "  ");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.splash_duration, Duration::from_millis(1234));
        assert!(!config.seed_sample_expenses);
        assert!(config.storage_path.is_none());

        std::env::set_var("FINPULSE_SEED_SAMPLES", "sometimes");
        assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));

        std::env::set_var("FINPULSE_SEED_SAMPLES", "1");
        std::env::set_var("FINPULSE_SPLASH_MS", "soon");
        assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));

        std::env::set_var("FINPULSE_SPLASH_MS", "61000");
        assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));

        std::env::remove_var("FINPULSE_SPLASH_MS");
        std::env::remove_var("FINPULSE_SEED_SAMPLES");
        std::env::remove_var("FINPULSE_STORAGE_PATH");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.splash_duration, Duration::from_secs(3));
        assert!(config.seed_sample_expenses);
    }

    #[test]
    fn test_optional_env_handling() {
        assert_eq!(optional::<u64>(Ok(5)).unwrap(), Some(5));
        assert_eq!(
            optional::<u64>(Err(envs::Error::MissingEnv("X"))).unwrap(),
            None
        );
        assert!(optional::<u64>(Err(envs::Error::WrongFormat("X"))).is_err());
    }

    #[test]
    fn test_open_store_uses_file_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let config = AppConfig {
            storage_path: Some(path.clone()),
            ..AppConfig::default()
        };

        let store = config.open_store();
        store.set("finpulse-theme", "dark").unwrap();
        assert!(path.exists());
    }
}
