//! # Rendering Boundary
//!
//! The controller does not draw anything. It hands the rendering layer a
//! [`ViewModel`] snapshot per frame; the renderer is a pure function of it.
//!
//! - [`theme`]: light/dark theme, shared visual-mode flag, palette
//! - [`nav_bar`]: bottom tab bar model

pub mod nav_bar;
pub mod theme;

use crate::app::{AppState, Screen, VisibleView};
use nav_bar::NavBar;
use serde::Serialize;
use shared::dto::auth::UserProfile;
use shared::dto::deals::SearchItem;
use shared::dto::expense::ExpenseRecord;
use theme::{Palette, Theme};

/// Everything a frame needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub view: VisibleView,
    pub screen: Screen,
    pub screen_title: &'static str,
    pub theme: Theme,
    pub palette: Palette,
    pub user: Option<UserProfile>,
    /// Newest first
    pub expenses: Vec<ExpenseRecord>,
    pub search_results: Vec<SearchItem>,
    /// Present only on screens that show the tab bar
    pub tab_bar: Option<NavBar>,
}

impl ViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            view: state.visible_view(),
            screen: state.current_screen,
            screen_title: state.current_screen.title(),
            theme: state.theme,
            palette: Palette::for_theme(state.theme),
            user: state.session.user().cloned(),
            expenses: state.expenses.to_vec(),
            search_results: state.search_results.clone(),
            tab_bar: NavBar::for_screen(state.current_screen),
        }
    }
}
