//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use super::error::Result;

/// Durable string key-value storage.
///
/// Plays the role browser `localStorage` plays for the web build: a handful
/// of small string entries that survive a restart. Implementations must be
/// safe to share between the controller and its splash timer.
///
/// See [`crate::services::storage`] for the in-memory and file-backed
/// implementations.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
