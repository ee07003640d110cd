//! # Shopping Search Handlers

use super::navigation::switch_screen_in_shell;
use super::notify;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::deals::SearchItem;
use std::sync::Arc;

/// Handle a completed deals search
///
/// The new results replace the previous set outright, then the shopping list
/// opens if the main shell is showing.
///
/// Internal handler function - use [`crate::app::App::set_search_results`] instead.
pub(crate) fn handle_search_results(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    results: Vec<SearchItem>,
) {
    let count = results.len();
    let screen_changed = {
        let mut state = state.write();
        state.search_results = results;
        switch_screen_in_shell(&mut state, Screen::ShoppingList)
    };

    tracing::debug!(count, "Search results replaced");
    notify(event_tx, AppEvent::SearchResultsReplaced { count });
    if screen_changed {
        notify(event_tx, AppEvent::ScreenChanged(Screen::ShoppingList));
    }
}
