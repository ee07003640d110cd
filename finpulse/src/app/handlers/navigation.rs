//! # Navigation Handlers
//!
//! The screen graph is flat: every screen is reachable from every other, but
//! only from inside the main shell.

use super::notify;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen, VisibleView};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Set the active screen, reporting whether it changed.
pub(crate) fn switch_screen(state: &mut AppState, screen: Screen) -> bool {
    let changed = state.current_screen != screen;
    state.current_screen = screen;
    changed
}

/// Switch screens only while the main shell is showing.
///
/// Requests arriving on the splash or login view are dropped, so a fresh
/// login always lands on the dashboard.
pub(crate) fn switch_screen_in_shell(state: &mut AppState, screen: Screen) -> bool {
    let view = state.visible_view();
    if view != VisibleView::MainShell {
        tracing::debug!(screen = %screen, ?view, "Ignoring navigation outside the main shell");
        return false;
    }
    switch_screen(state, screen)
}

/// Handle screen change
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_screen_change(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    screen: Screen,
) {
    let changed = switch_screen_in_shell(&mut state.write(), screen);

    if changed {
        tracing::debug!(screen = %screen, "Screen changed");
        notify(event_tx, AppEvent::ScreenChanged(screen));
    }
}
