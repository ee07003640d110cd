//! # Application State Types
//!
//! All state owned by the controller: splash flag, session, active screen,
//! theme, expense ledger, and the last shopping search.

use crate::ui::theme::Theme;
use serde::{Deserialize, Serialize};
use shared::dto::auth::UserProfile;
use shared::dto::deals::SearchItem;
use shared::dto::expense::{ExpenseRecord, NewExpense};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Application screens shown inside the main shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Home: recent expenses and shortcuts
    #[default]
    Dashboard,
    /// Expense entry form
    AddExpense,
    /// Spending breakdown by category
    SpendingSummary,
    /// Shopping deals search
    ShoppingDeals,
    /// Results of the last deals search
    ShoppingList,
    /// Theme, profile and logout
    Settings,
}

impl Screen {
    /// Get all screens in declaration order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::AddExpense,
            Screen::SpendingSummary,
            Screen::ShoppingDeals,
            Screen::ShoppingList,
            Screen::Settings,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::AddExpense => "Add Expense",
            Screen::SpendingSummary => "Spending Summary",
            Screen::ShoppingDeals => "Shopping Deals",
            Screen::ShoppingList => "Shopping List",
            Screen::Settings => "Settings",
        }
    }

    /// Routing tag used by the rendering layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::AddExpense => "add-expense",
            Screen::SpendingSummary => "spending-summary",
            Screen::ShoppingDeals => "shopping-deals",
            Screen::ShoppingList => "shopping-list",
            Screen::Settings => "settings",
        }
    }

    /// Whether the bottom tab bar is drawn on this screen
    pub fn shows_tab_bar(&self) -> bool {
        matches!(self, Screen::Dashboard | Screen::ShoppingDeals)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::all()
            .iter()
            .copied()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| format!("unknown screen '{}'", s))
    }
}

/// Top-level view chosen by the lifecycle gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibleView {
    Splash,
    Login,
    MainShell,
}

/// Authentication state.
///
/// Authenticated exactly when a user profile is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserProfile>,
}

impl Session {
    pub fn logged_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub(crate) fn begin(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    pub(crate) fn end(&mut self) {
        self.user = None;
    }
}

/// Expense records, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLedger {
    records: VecDeque<ExpenseRecord>,
    next_id: u64,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self {
            records: VecDeque::new(),
            next_id: 1,
        }
    }
}

impl ExpenseLedger {
    /// Build from records already ordered newest first.
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            records: records.into(),
            next_id,
        }
    }

    /// The sample ledger a fresh install starts with.
    pub fn with_samples() -> Self {
        Self::from_records(vec![
            NewExpense::new(250.0, "Food", "2025-11-10", "Lunch at canteen").into_record(1),
            NewExpense::new(50.0, "Transport", "2025-11-10", "Metro ride").into_record(2),
            NewExpense::new(120.0, "Entertainment", "2025-11-09", "Movie ticket").into_record(3),
            NewExpense::new(200.0, "Food", "2025-11-09", "Dinner with friends").into_record(4),
            NewExpense::new(100.0, "Shopping", "2025-11-08", "Notebooks").into_record(5),
        ])
    }

    /// Record an expense at the head of the ledger and return it.
    pub fn add(&mut self, expense: NewExpense) -> ExpenseRecord {
        let record = expense.into_record(self.next_id);
        self.next_id += 1;
        self.records.push_front(record.clone());
        record
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recently added record
    pub fn latest(&self) -> Option<&ExpenseRecord> {
        self.records.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn to_vec(&self) -> Vec<ExpenseRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Spend per category, keyed alphabetically
    pub fn totals_by_category(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for record in &self.records {
            *totals.entry(record.category.clone()).or_insert(0.0) += record.amount;
        }
        totals
    }
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Splash screen still showing
    pub splash_visible: bool,
    /// Login session
    pub session: Session,
    /// Current active screen
    pub current_screen: Screen,
    /// Selected presentation theme
    pub theme: Theme,
    /// Expense ledger (not persisted)
    pub expenses: ExpenseLedger,
    /// Result set of the last shopping search (not persisted)
    pub search_results: Vec<SearchItem>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Session::default(), Theme::default(), ExpenseLedger::with_samples())
    }
}

impl AppState {
    pub fn new(session: Session, theme: Theme, expenses: ExpenseLedger) -> Self {
        Self {
            splash_visible: true,
            session,
            current_screen: Screen::Dashboard,
            theme,
            expenses,
            search_results: Vec::new(),
        }
    }

    /// Check if a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Lifecycle gate: splash first, then login until authenticated, then the shell.
    pub fn visible_view(&self) -> VisibleView {
        if self.splash_visible {
            VisibleView::Splash
        } else if !self.is_authenticated() {
            VisibleView::Login
        } else {
            VisibleView::MainShell
        }
    }

    pub fn tab_bar_visible(&self) -> bool {
        self.current_screen.shows_tab_bar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_tags_round_trip() {
        for screen in Screen::all() {
            assert_eq!(screen.as_str().parse::<Screen>().unwrap(), *screen);
        }
        assert!("home".parse::<Screen>().is_err());
        assert_eq!(Screen::default(), Screen::Dashboard);
    }

    #[test]
    fn test_screen_serde_uses_kebab_tags() {
        let json = serde_json::to_string(&Screen::SpendingSummary).unwrap();
        assert_eq!(json, "\"spending-summary\"");
    }

    #[test]
    fn test_tab_bar_visibility_per_screen() {
        let visible: Vec<Screen> = Screen::all()
            .iter()
            .copied()
            .filter(Screen::shows_tab_bar)
            .collect();
        assert_eq!(visible, vec![Screen::Dashboard, Screen::ShoppingDeals]);
    }

    // ========== Lifecycle Gate Tests ==========

    #[test]
    fn test_visible_view_precedence() {
        let mut state = AppState::default();
        assert_eq!(state.visible_view(), VisibleView::Splash);

        state.session.begin(UserProfile::new("Asha", "asha@example.com"));
        assert_eq!(state.visible_view(), VisibleView::Splash);

        state.splash_visible = false;
        assert_eq!(state.visible_view(), VisibleView::MainShell);

        state.session.end();
        assert_eq!(state.visible_view(), VisibleView::Login);
    }

    // ========== Ledger Tests ==========

    #[test]
    fn test_samples_are_newest_first() {
        let ledger = ExpenseLedger::with_samples();
        let ids: Vec<u64> = ledger.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(ledger.latest().unwrap().notes, "Lunch at canteen");
    }

    #[test]
    fn test_add_prepends_with_next_id() {
        let mut ledger = ExpenseLedger::with_samples();
        let record = ledger.add(NewExpense::new(75.0, "Food", "2025-11-11", "Snack"));
        assert_eq!(record.id, 6);
        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.latest(), Some(&record));

        let second = ledger.add(NewExpense::new(10.0, "Transport", "2025-11-12", "Bus"));
        assert_eq!(second.id, 7);
    }

    #[test]
    fn test_empty_ledger_starts_at_one() {
        let mut ledger = ExpenseLedger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.add(NewExpense::new(1.0, "Misc", "2025-01-01", "")).id, 1);
    }

    #[test]
    fn test_totals() {
        let ledger = ExpenseLedger::with_samples();
        assert_eq!(ledger.total(), 720.0);
        let totals = ledger.totals_by_category();
        assert_eq!(totals.get("Food"), Some(&450.0));
        assert_eq!(totals.get("Transport"), Some(&50.0));
        assert_eq!(totals.len(), 4);
    }
}
