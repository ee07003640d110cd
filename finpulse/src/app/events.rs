//! # Application Events
//!
//! Two directions of traffic between the controller and the rendering layer:
//!
//! - [`UiEvent`]: user actions the renderer forwards into the controller
//! - [`AppEvent`]: change notifications the controller emits after each mutation

use crate::app::state::Screen;
use crate::ui::theme::Theme;
use shared::dto::auth::UserProfile;
use shared::dto::deals::SearchItem;
use shared::dto::expense::NewExpense;

/// Events emitted by screens, tab taps and forms
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Login form submitted
    Login(UserProfile),
    /// Logout pressed on the settings screen
    Logout,
    /// Tab tap or in-screen navigation
    Navigate(Screen),
    /// Add-expense form submitted
    AddExpense(NewExpense),
    /// Deals search completed
    SearchCompleted(Vec<SearchItem>),
    /// Theme picked on the settings screen
    SetTheme(Theme),
}

/// State changes sent to the main thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Splash timer fired
    SplashDismissed,
    /// Logged in or out
    SessionChanged { authenticated: bool },
    /// Active screen changed
    ScreenChanged(Screen),
    /// Theme changed
    ThemeChanged(Theme),
    /// A record was added to the ledger
    ExpenseAdded { id: u64 },
    /// Search result set replaced
    SearchResultsReplaced { count: usize },
}
