//! # Durable Key-Value Storage
//!
//! Backends for [`KeyValueStore`] and the typed, best-effort accessors the
//! controller uses for its three persisted entries.
//!
//! | Key | Value |
//! |---|---|
//! | [`keys::AUTH`] | `"true"` while a session is persisted |
//! | [`keys::USER`] | JSON [`UserProfile`] |
//! | [`keys::THEME`] | `"light"` or `"dark"` |
//!
//! Reads report a [`StorageRead`] so callers can tell a missing entry from a
//! corrupt one. Writes never fail the caller: errors are logged and dropped.

use crate::core::error::{AppError, Result};
use crate::core::service::KeyValueStore;
use crate::ui::theme::Theme;
use parking_lot::{Mutex, RwLock};
use shared::dto::auth::UserProfile;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Storage keys, shared with the web build.
pub mod keys {
    pub const AUTH: &str = "finpulse-auth";
    pub const USER: &str = "finpulse-user";
    pub const THEME: &str = "finpulse-theme";
}

/// Outcome of reading a typed value from storage.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageRead<T> {
    Found(T),
    Absent,
    Corrupt(String),
}

impl<T> StorageRead<T> {
    /// Collapse to a value, falling back on `Absent` and `Corrupt`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            StorageRead::Found(value) => value,
            StorageRead::Absent | StorageRead::Corrupt(_) => default,
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            StorageRead::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, StorageRead::Corrupt(_))
    }
}

// region:    --- Backends

/// In-process store.
///
/// Clones share the same entries, which lets tests build a second controller
/// over the same data to simulate a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The file is re-read on every access so external edits are picked up;
/// writes go through a temporary file and a rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!(
                "store file {} is not a JSON string map: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Entries to rewrite from; an unreadable file is replaced rather than blocking writes.
    fn entries_for_write(&self) -> Result<BTreeMap<String, String>> {
        match self.read_entries() {
            Err(AppError::Storage(reason)) if self.path.exists() => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "Discarding unreadable store file"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.entries_for_write()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

// endregion: --- Backends

// region:    --- Typed accessors

fn read_raw(store: &dyn KeyValueStore, key: &str) -> StorageRead<String> {
    match store.get(key) {
        Ok(Some(value)) => StorageRead::Found(value),
        Ok(None) => StorageRead::Absent,
        Err(e) => StorageRead::Corrupt(e.to_string()),
    }
}

/// Read the persisted session.
///
/// A session exists only when the auth flag is exactly `"true"` and the user
/// entry holds a parseable profile.
pub fn load_session(store: &dyn KeyValueStore) -> StorageRead<UserProfile> {
    match read_raw(store, keys::AUTH) {
        StorageRead::Found(flag) if flag == "true" => {}
        StorageRead::Found(flag) => {
            return StorageRead::Corrupt(format!("unexpected auth flag '{}'", flag))
        }
        StorageRead::Absent => return StorageRead::Absent,
        StorageRead::Corrupt(reason) => return StorageRead::Corrupt(reason),
    }

    match read_raw(store, keys::USER) {
        StorageRead::Found(raw) => match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => StorageRead::Found(profile),
            Err(e) => StorageRead::Corrupt(format!("stored user is not a profile: {}", e)),
        },
        StorageRead::Absent => {
            StorageRead::Corrupt("auth flag set without a stored user".to_string())
        }
        StorageRead::Corrupt(reason) => StorageRead::Corrupt(reason),
    }
}

/// Read the persisted theme.
pub fn load_theme(store: &dyn KeyValueStore) -> StorageRead<Theme> {
    match read_raw(store, keys::THEME) {
        StorageRead::Found(raw) => match raw.parse::<Theme>() {
            Ok(theme) => StorageRead::Found(theme),
            Err(reason) => StorageRead::Corrupt(reason),
        },
        StorageRead::Absent => StorageRead::Absent,
        StorageRead::Corrupt(reason) => StorageRead::Corrupt(reason),
    }
}

fn try_save_session(store: &dyn KeyValueStore, profile: &UserProfile) -> Result<()> {
    let user = serde_json::to_string(profile)?;
    store.set(keys::AUTH, "true")?;
    store.set(keys::USER, &user)
}

/// Persist the session. Best effort.
pub fn save_session(store: &dyn KeyValueStore, profile: &UserProfile) {
    if let Err(e) = try_save_session(store, profile) {
        tracing::warn!(error = %e, "Failed to persist session");
    }
}

/// Remove the persisted session. Best effort.
pub fn clear_session(store: &dyn KeyValueStore) {
    for key in [keys::AUTH, keys::USER] {
        if let Err(e) = store.remove(key) {
            tracing::warn!(key, error = %e, "Failed to remove persisted session entry");
        }
    }
}

/// Persist the theme. Best effort.
pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) {
    if let Err(e) = store.set(keys::THEME, theme.as_str()) {
        tracing::warn!(theme = %theme, error = %e, "Failed to persist theme");
    }
}

// endregion: --- Typed accessors

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend whose every call fails, standing in for a broken disk.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Storage("device unavailable".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Storage("device unavailable".into()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(AppError::Storage("device unavailable".into()))
        }
    }

    // ========== MemoryStore Tests ==========

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
        other.remove("k").unwrap();
        assert!(store.is_empty());
        // Removing an absent key is fine
        store.remove("k").unwrap();
    }

    // ========== FileStore Tests ==========

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::new(&path);
        assert_eq!(store.get(keys::THEME).unwrap(), None);
        store.set(keys::THEME, "dark").unwrap();
        store.set(keys::AUTH, "true").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(keys::THEME).unwrap().as_deref(), Some("dark"));
        reopened.remove(keys::AUTH).unwrap();
        assert_eq!(store.get(keys::AUTH).unwrap(), None);
    }

    #[test]
    fn test_file_store_reports_corrupt_file_then_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get(keys::THEME), Err(AppError::Storage(_))));
        assert!(load_theme(&store).is_corrupt());

        store.set(keys::THEME, "light").unwrap();
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
    }

    // ========== Typed Accessor Tests ==========

    #[test]
    fn test_session_round_trip_and_clear() {
        let store = MemoryStore::new();
        assert_eq!(load_session(&store), StorageRead::Absent);

        let profile = UserProfile::new("Asha", "asha@example.com");
        save_session(&store, &profile);
        assert_eq!(store.get(keys::AUTH).unwrap().as_deref(), Some("true"));
        assert_eq!(load_session(&store), StorageRead::Found(profile));

        clear_session(&store);
        assert_eq!(load_session(&store), StorageRead::Absent);
        assert!(store.is_empty());
    }

    #[test]
    fn test_session_corrupt_cases() {
        let store = MemoryStore::new();
        store.set(keys::AUTH, "true").unwrap();
        assert!(load_session(&store).is_corrupt());

        store.set(keys::USER, "{\"name\":").unwrap();
        assert!(load_session(&store).is_corrupt());

        store.set(keys::AUTH, "yes").unwrap();
        store
            .set(keys::USER, r#"{"name":"Asha","email":"asha@example.com"}"#)
            .unwrap();
        assert!(load_session(&store).is_corrupt());
    }

    #[test]
    fn test_theme_absent_corrupt_found() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), StorageRead::Absent);

        store.set(keys::THEME, "purple").unwrap();
        assert!(load_theme(&store).is_corrupt());
        assert_eq!(load_theme(&store).unwrap_or(Theme::Light), Theme::Light);

        save_theme(&store, Theme::Dark);
        assert_eq!(load_theme(&store), StorageRead::Found(Theme::Dark));
    }

    #[test]
    fn test_broken_backend_degrades_silently() {
        let store = BrokenStore;
        assert!(load_session(&store).is_corrupt());
        assert!(load_theme(&store).is_corrupt());
        // Writes are best effort and must not panic
        save_theme(&store, Theme::Dark);
        save_session(&store, &UserProfile::new("Asha", "asha@example.com"));
        clear_session(&store);
    }
}
