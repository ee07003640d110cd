use serde::{Deserialize, Serialize};

/// A single entry in the expense ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    /// Ledger-assigned identifier, never reused within a session
    pub id: u64,
    pub amount: f64,
    pub category: String,
    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub notes: String,
}

/// Fields submitted by the add-expense form.
///
/// The ledger assigns the id when the expense is recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub notes: String,
}

impl NewExpense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
            notes: notes.into(),
        }
    }

    /// Attach an id, producing the stored record.
    pub fn into_record(self, id: u64) -> ExpenseRecord {
        ExpenseRecord {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_keeps_fields() {
        let record = NewExpense::new(75.0, "Food", "2025-11-11", "Snack").into_record(6);
        assert_eq!(record.id, 6);
        assert_eq!(record.amount, 75.0);
        assert_eq!(record.category, "Food");
        assert_eq!(record.date, "2025-11-11");
        assert_eq!(record.notes, "Snack");
    }
}
