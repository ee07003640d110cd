//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`KeyValueStore`)
//!
//! ## Dependency Injection
//!
//! The controller only talks to storage through [`KeyValueStore`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use finpulse::core::service::KeyValueStore;
//! use finpulse::services::storage::MemoryStore;
//!
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! store.set("finpulse-theme", "dark").unwrap();
//! assert_eq!(store.get("finpulse-theme").unwrap().as_deref(), Some("dark"));
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::KeyValueStore;
