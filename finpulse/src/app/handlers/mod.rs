//! # Event Handlers
//!
//! Handlers organized by concern. Each takes the shared state handle and the
//! collaborators it needs explicitly; none reach for globals.

pub mod auth;
pub mod expenses;
pub mod navigation;
pub mod search;
pub mod settings;

use crate::app::events::AppEvent;
use async_channel::Sender;

/// Queue a change notification. A closed channel means nobody is rendering anymore.
pub(crate) fn notify(event_tx: &Sender<AppEvent>, event: AppEvent) {
    if event_tx.try_send(event).is_err() {
        tracing::trace!("Change notification dropped - receiver gone");
    }
}
