//! # Application Orchestrator
//!
//! The [`App`] struct is the session & navigation controller. It owns every
//! piece of state the screens share and is the only thing that mutates it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                Rendering layer (external)                │
//! │  - calls on_tick() + snapshot() every frame              │
//! │  - forwards taps/forms as UiEvent via dispatch()         │
//! └───────────────┬──────────────────────────▲───────────────┘
//!                 │ UiEvent                  │ ViewModel / AppEvent
//! ┌───────────────▼──────────────────────────┴───────────────┐
//! │  App (orchestrator)                                      │
//! │  - handlers::{auth, navigation, settings, expenses,      │
//! │    search} mutate Arc<RwLock<AppState>>                  │
//! │  - every mutation queues an AppEvent (async_channel)     │
//! │  - tasks::splash hides the splash once, after a delay    │
//! └───────────────┬──────────────────────────────────────────┘
//!                 │ KeyValueStore (session + theme only)
//!         ┌───────▼────────┐
//!         │ durable store  │
//!         └────────────────┘
//! ```
//!
//! ## Lifecycle gate
//!
//! [`AppState::visible_view`] picks splash, login, or the main shell.
//! The splash disappears once, [`AppConfig::splash_duration`] after
//! construction. Dropping the [`App`] cancels a pending splash timer.
//!
//! ## Persistence
//!
//! Session and theme survive a restart through the [`KeyValueStore`]; the
//! expense ledger, search results, and active screen do not. Unreadable
//! persisted data falls back to logged-out / light theme without error.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use finpulse::app::{App, Screen, UiEvent};
//! use shared::dto::auth::UserProfile;
//!
//! # async fn run() {
//! let mut app = App::with_memory_store();
//!
//! // In the render loop:
//! if app.on_tick() {
//!     let frame = app.snapshot();
//!     // draw(frame)
//! }
//!
//! // From the login form:
//! app.dispatch(UiEvent::Login(UserProfile::new("Asha", "asha@example.com")));
//! app.dispatch(UiEvent::Navigate(Screen::ShoppingDeals));
//! # }
//! ```

mod events;
mod handlers;
mod state;
pub mod tasks;

pub use events::{AppEvent, UiEvent};
pub use state::*;

use crate::config::AppConfig;
use crate::core::error::Result;
use crate::core::service::KeyValueStore;
use crate::services::storage::MemoryStore;
use crate::ui::theme::{Theme, VisualMode};
use crate::ui::ViewModel;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::auth::UserProfile;
use shared::dto::deals::SearchItem;
use shared::dto::expense::{ExpenseRecord, NewExpense};
use std::sync::Arc;
use tasks::splash::SplashTimer;

/// Session & navigation controller.
///
/// Construct one per running app (or per test); instances share nothing
/// unless they are handed the same [`KeyValueStore`].
pub struct App {
    /// Shared application state.
    ///
    /// Hold locks briefly; the splash timer writes through the same lock.
    pub state: Arc<RwLock<AppState>>,

    /// Change notifications, drained by [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    storage: Arc<dyn KeyValueStore>,
    visual_mode: VisualMode,
    config: AppConfig,
    splash_timer: SplashTimer,
}

impl App {
    /// Create a controller, restoring session and theme from `storage`.
    ///
    /// Arms the splash timer on the current tokio runtime, or on a helper
    /// thread when called outside one.
    pub fn new(config: AppConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let session = match handlers::auth::restore_session(storage.as_ref()) {
            Some(profile) => Session::logged_in(profile),
            None => Session::default(),
        };
        let theme = handlers::settings::load_theme(storage.as_ref());
        let expenses = if config.seed_sample_expenses {
            ExpenseLedger::with_samples()
        } else {
            ExpenseLedger::default()
        };

        let state = Arc::new(RwLock::new(AppState::new(session, theme, expenses)));
        let visual_mode = VisualMode::new(theme);
        let (event_tx, event_rx) = unbounded();

        let splash_timer = SplashTimer::start(
            Arc::downgrade(&state),
            event_tx.clone(),
            config.splash_duration,
        );

        tracing::info!(
            authenticated = state.read().is_authenticated(),
            theme = %theme,
            "App state initialized"
        );

        Self {
            state,
            event_rx,
            event_tx,
            storage,
            visual_mode,
            config,
            splash_timer,
        }
    }

    /// Controller with default config over a fresh in-memory store.
    pub fn with_memory_store() -> Self {
        Self::new(AppConfig::default(), Arc::new(MemoryStore::new()))
    }

    /// Controller configured from the environment (see [`AppConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        let config = AppConfig::from_env()?;
        let storage = config.open_store();
        Ok(Self::new(config, storage))
    }

    // ========== Operations ==========

    /// Start a session for `profile` and persist it.
    pub fn login(&mut self, profile: UserProfile) {
        handlers::auth::handle_login(&self.state, self.storage.as_ref(), &self.event_tx, profile);
    }

    /// End the session, return to the dashboard, and forget the persisted session.
    pub fn logout(&mut self) {
        handlers::auth::handle_logout(&self.state, self.storage.as_ref(), &self.event_tx);
    }

    /// Switch the active screen. Any screen is reachable from any other.
    pub fn navigate(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(&self.state, &self.event_tx, screen);
    }

    /// Select, persist, and apply a theme.
    pub fn set_theme(&mut self, theme: Theme) {
        handlers::settings::handle_theme_change(
            &self.state,
            self.storage.as_ref(),
            &self.visual_mode,
            &self.event_tx,
            theme,
        );
    }

    /// Record an expense (newest first) and go back to the dashboard.
    pub fn add_expense(&mut self, expense: NewExpense) -> ExpenseRecord {
        handlers::expenses::handle_add_expense(&self.state, &self.event_tx, expense)
    }

    /// Replace the search result set and open the shopping list.
    pub fn set_search_results(&mut self, results: Vec<SearchItem>) {
        handlers::search::handle_search_results(&self.state, &self.event_tx, results);
    }

    /// Route a renderer event to the matching operation.
    pub fn dispatch(&mut self, event: UiEvent) {
        tracing::trace!(?event, "Dispatching UI event");
        match event {
            UiEvent::Login(profile) => self.login(profile),
            UiEvent::Logout => self.logout(),
            UiEvent::Navigate(screen) => self.navigate(screen),
            UiEvent::AddExpense(expense) => {
                self.add_expense(expense);
            }
            UiEvent::SearchCompleted(results) => self.set_search_results(results),
            UiEvent::SetTheme(theme) => self.set_theme(theme),
        }
    }

    // ========== Frame Loop ==========

    /// Take every pending change notification.
    pub fn drain_events(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Called every frame. Returns `true` when state changed since the last call.
    pub fn on_tick(&mut self) -> bool {
        let events = self.drain_events();
        if !events.is_empty() {
            tracing::trace!(count = events.len(), "Processed change notifications");
        }
        !events.is_empty()
    }

    /// Snapshot for the renderer.
    pub fn snapshot(&self) -> ViewModel {
        ViewModel::from_state(&self.state.read())
    }

    // ========== Queries ==========

    pub fn visible_view(&self) -> VisibleView {
        self.state.read().visible_view()
    }

    pub fn splash_visible(&self) -> bool {
        self.state.read().splash_visible
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.read().session.user().cloned()
    }

    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen
    }

    pub fn tab_bar_visible(&self) -> bool {
        self.state.read().tab_bar_visible()
    }

    pub fn theme(&self) -> Theme {
        self.state.read().theme
    }

    /// Expense records, newest first.
    pub fn expenses(&self) -> Vec<ExpenseRecord> {
        self.state.read().expenses.to_vec()
    }

    pub fn search_results(&self) -> Vec<SearchItem> {
        self.state.read().search_results.clone()
    }

    /// Handle to the dark-mode flag for the renderer.
    pub fn visual_mode(&self) -> VisualMode {
        self.visual_mode.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.splash_timer.cancel();
        tracing::debug!("App torn down");
    }
}
