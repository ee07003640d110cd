//! # Authentication Handlers
//!
//! Login and logout. Credentials are checked by the login form collaborator;
//! by the time a profile reaches here it is accepted as is.

use super::navigation::switch_screen;
use super::notify;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::core::service::KeyValueStore;
use crate::services::storage;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::auth::UserProfile;
use std::sync::Arc;

/// Handle login form submission
///
/// Internal handler function - use [`crate::app::App::login`] instead.
pub(crate) fn handle_login(
    state: &Arc<RwLock<AppState>>,
    store: &dyn KeyValueStore,
    event_tx: &Sender<AppEvent>,
    profile: UserProfile,
) {
    storage::save_session(store, &profile);
    tracing::info!(user = %profile.email, "User logged in");

    let changed = {
        let mut state = state.write();
        let changed = state.session.user() != Some(&profile);
        state.session.begin(profile);
        changed
    };

    if changed {
        notify(event_tx, AppEvent::SessionChanged { authenticated: true });
    }
}

/// Handle logout
///
/// Safe to call when already logged out; the end state is the same.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout(
    state: &Arc<RwLock<AppState>>,
    store: &dyn KeyValueStore,
    event_tx: &Sender<AppEvent>,
) {
    let (was_authenticated, screen_changed) = {
        let mut state = state.write();
        let was_authenticated = state.is_authenticated();
        state.session.end();
        (was_authenticated, switch_screen(&mut state, Screen::Dashboard))
    };

    storage::clear_session(store);

    if was_authenticated {
        tracing::info!("User logged out");
        notify(event_tx, AppEvent::SessionChanged { authenticated: false });
    }
    if screen_changed {
        notify(event_tx, AppEvent::ScreenChanged(Screen::Dashboard));
    }
}

/// Restore a persisted session at startup, falling back to logged out.
pub(crate) fn restore_session(store: &dyn KeyValueStore) -> Option<UserProfile> {
    match storage::load_session(store) {
        storage::StorageRead::Found(profile) => {
            tracing::info!(user = %profile.email, "Restored persisted session");
            Some(profile)
        }
        storage::StorageRead::Absent => None,
        storage::StorageRead::Corrupt(reason) => {
            tracing::warn!(%reason, "Ignoring unreadable persisted session");
            None
        }
    }
}
