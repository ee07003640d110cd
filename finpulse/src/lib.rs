//! # FinPulse - Session & Navigation Controller
//!
//! Headless core of the FinPulse personal finance & shopping companion.
//! A rendering layer (web view, native GUI, TUI) embeds [`App`], draws the
//! [`ui::ViewModel`] it hands out every frame, and forwards user actions back
//! as [`UiEvent`]s.
//!
//! ## What the controller owns
//!
//! - splash visibility (one-shot, time-boxed)
//! - the login session and user profile (persisted)
//! - the active screen
//! - the light/dark theme (persisted)
//! - the expense ledger, seeded with sample records
//! - the last shopping search result set
//!
//! ## Module Structure
//!
//! - **app**: [`App`] orchestrator, state types, handlers, splash timer
//! - **core**: error type and the [`core::KeyValueStore`](crate::core::KeyValueStore) trait
//! - **services**: storage backends (`MemoryStore`, `FileStore`) and typed accessors
//! - **ui**: view model, theme/visual mode, tab bar model
//! - **config**: [`AppConfig`] from environment variables
//! - **debug**: tracing setup with a rotating log file
//! - **utils**: form-level validation helpers
//!
//! ```text
//! renderer ──UiEvent──▶ App ──handlers──▶ Arc<RwLock<AppState>>
//!    ▲                   │                       │
//!    └──ViewModel/AppEvent┘            KeyValueStore (session, theme)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use finpulse::{App, Screen, UiEvent, VisibleView};
//! use shared::dto::auth::UserProfile;
//!
//! #[tokio::main]
//! async fn main() -> finpulse::Result<()> {
//!     let _log_guard = finpulse::debug::init();
//!     let mut app = App::from_env()?;
//!
//!     if app.visible_view() == VisibleView::Login {
//!         app.dispatch(UiEvent::Login(UserProfile::new("Asha", "asha@example.com")));
//!     }
//!     app.dispatch(UiEvent::Navigate(Screen::SpendingSummary));
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen, UiEvent, VisibleView};
pub use config::AppConfig;
pub use crate::core::{AppError, Result};
pub use ui::theme::Theme;
