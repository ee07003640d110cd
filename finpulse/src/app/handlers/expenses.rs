//! # Expense Handlers

use super::navigation::switch_screen_in_shell;
use super::notify;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::expense::{ExpenseRecord, NewExpense};
use std::sync::Arc;

/// Handle add-expense form submission
///
/// Records the expense at the head of the ledger and, inside the main shell,
/// returns to the dashboard.
///
/// Internal handler function - use [`crate::app::App::add_expense`] instead.
pub(crate) fn handle_add_expense(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    expense: NewExpense,
) -> ExpenseRecord {
    let (record, screen_changed) = {
        let mut state = state.write();
        let record = state.expenses.add(expense);
        (record, switch_screen_in_shell(&mut state, Screen::Dashboard))
    };

    tracing::info!(
        id = record.id,
        amount = record.amount,
        category = %record.category,
        "Expense added"
    );
    notify(event_tx, AppEvent::ExpenseAdded { id: record.id });
    if screen_changed {
        notify(event_tx, AppEvent::ScreenChanged(Screen::Dashboard));
    }

    record
}
