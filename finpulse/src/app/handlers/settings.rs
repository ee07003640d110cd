//! # Settings Handlers
//!
//! Theme selection and its persistence.

use super::notify;
use crate::app::events::AppEvent;
use crate::app::AppState;
use crate::core::service::KeyValueStore;
use crate::services::storage::{self, StorageRead};
use crate::ui::theme::{Theme, VisualMode};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Load the persisted theme, defaulting to light
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match storage::load_theme(store) {
        StorageRead::Found(theme) => {
            tracing::info!(theme = %theme, "Loaded theme");
            theme
        }
        StorageRead::Absent => Theme::default(),
        StorageRead::Corrupt(reason) => {
            tracing::warn!(%reason, "Failed to load theme. Using default.");
            Theme::default()
        }
    }
}

/// Handle theme change
///
/// Persists the theme and flips the visual mode before returning, so the next
/// frame already renders with it.
pub(crate) fn handle_theme_change(
    state: &Arc<RwLock<AppState>>,
    store: &dyn KeyValueStore,
    visual_mode: &VisualMode,
    event_tx: &Sender<AppEvent>,
    theme: Theme,
) {
    let changed = std::mem::replace(&mut state.write().theme, theme) != theme;
    storage::save_theme(store, theme);
    visual_mode.apply(theme);

    if changed {
        tracing::info!(theme = %theme, "Theme changed");
        notify(event_tx, AppEvent::ThemeChanged(theme));
    }
}
