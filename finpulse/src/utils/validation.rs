//! Validation helpers for the form collaborators.
//!
//! The controller accepts whatever the forms submit; these are for the forms
//! to call before emitting `Login` or `AddExpense`.

use crate::core::error::{AppError, Result};
use lib_utils::{time, validation};
use shared::dto::auth::UserProfile;
use shared::dto::expense::NewExpense;

fn check(result: std::result::Result<(), String>) -> Result<()> {
    result.map_err(AppError::Validation)
}

/// Validate a login profile: a name and a plausible email.
pub fn validate_profile(profile: &UserProfile) -> Result<()> {
    check(validation::validate_not_empty(&profile.name, "Name"))?;
    check(validation::validate_not_empty(&profile.email, "Email"))?;
    check(validation::validate_email(profile.email.trim()))
}

/// Validate an add-expense submission.
pub fn validate_new_expense(expense: &NewExpense) -> Result<()> {
    check(validation::validate_positive(expense.amount, "Amount"))?;
    check(validation::validate_not_empty(&expense.category, "Category"))?;
    time::parse_iso_date(&expense.date)
        .map(|_| ())
        .map_err(|_| AppError::Validation(format!("Date '{}' is not YYYY-MM-DD", expense.date)))
}

/// Add-expense payload dated today (UTC), as the form pre-fills it.
pub fn expense_for_today(
    amount: f64,
    category: impl Into<String>,
    notes: impl Into<String>,
) -> NewExpense {
    NewExpense::new(amount, category, time::today_iso(), notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation() {
        assert!(validate_profile(&UserProfile::new("Asha", "asha@example.com")).is_ok());
        assert!(matches!(
            validate_profile(&UserProfile::new("", "asha@example.com")),
            Err(AppError::Validation(msg)) if msg == "Name cannot be empty"
        ));
        assert!(validate_profile(&UserProfile::new("Asha", "asha")).is_err());
        assert!(validate_profile(&UserProfile::new("Asha", "")).is_err());
    }

    #[test]
    fn test_expense_validation() {
        let expense = NewExpense::new(75.0, "Food", "2025-11-11", "Snack");
        assert!(validate_new_expense(&expense).is_ok());
        // Notes are optional
        assert!(validate_new_expense(&NewExpense::new(75.0, "Food", "2025-11-11", "")).is_ok());
        assert!(validate_new_expense(&NewExpense::new(0.0, "Food", "2025-11-11", "")).is_err());
        assert!(validate_new_expense(&NewExpense::new(5.0, " ", "2025-11-11", "")).is_err());
        assert!(validate_new_expense(&NewExpense::new(5.0, "Food", "11/11/2025", "")).is_err());
    }

    #[test]
    fn test_expense_for_today_is_valid() {
        let expense = expense_for_today(42.0, "Transport", "Cab");
        assert!(validate_new_expense(&expense).is_ok());
        assert_eq!(expense.date, time::today_iso());
    }
}
