//! # Bottom Navigation Bar
//!
//! Model of the tab bar drawn under the dashboard and the deals screen.
//! The renderer draws it; tapping a tab sends [`crate::app::UiEvent::Navigate`]
//! with the tab's target.

use crate::app::Screen;
use serde::Serialize;

/// One tab of the bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavTab {
    pub label: &'static str,
    pub target: Screen,
    /// Drawn as the raised round button instead of an icon with a label
    pub prominent: bool,
}

/// Tabs in display order
pub const TABS: [NavTab; 4] = [
    NavTab {
        label: "Home",
        target: Screen::Dashboard,
        prominent: false,
    },
    NavTab {
        label: "Add",
        target: Screen::AddExpense,
        prominent: true,
    },
    NavTab {
        label: "Deals",
        target: Screen::ShoppingDeals,
        prominent: false,
    },
    NavTab {
        label: "Settings",
        target: Screen::Settings,
        prominent: false,
    },
];

/// Tab bar for the current frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub tabs: Vec<NavTab>,
    /// Tab highlighted as the current screen, if any
    pub active: Option<Screen>,
}

impl NavBar {
    /// Build the bar for `current`, or `None` on screens that hide it.
    pub fn for_screen(current: Screen) -> Option<Self> {
        if !current.shows_tab_bar() {
            return None;
        }
        let active = TABS
            .iter()
            .find(|tab| !tab.prominent && tab.target == current)
            .map(|tab| tab.target);
        Some(Self {
            tabs: TABS.to_vec(),
            active,
        })
    }

    pub fn is_active(&self, tab: &NavTab) -> bool {
        self.active == Some(tab.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_only_on_dashboard_and_deals() {
        for screen in Screen::all() {
            assert_eq!(NavBar::for_screen(*screen).is_some(), screen.shows_tab_bar());
        }
    }

    #[test]
    fn test_active_tab_follows_screen() {
        let bar = NavBar::for_screen(Screen::ShoppingDeals).unwrap();
        assert_eq!(bar.active, Some(Screen::ShoppingDeals));
        assert!(bar.is_active(&TABS[2]));
        assert!(!bar.is_active(&TABS[0]));
        assert_eq!(bar.tabs.len(), 4);
    }
}
