//! The expense filter engine.

use serde::{Deserialize, Serialize};

use super::selector::{CategorySelector, MonthSelector};
use crate::expense::Expense;

/// A combined category/month query over expense records.
///
/// Applying a query is a pure function of (records, selectors): no side
/// effects, idempotent, and order-preserving. The result is always a stable
/// subsequence of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseQuery {
    /// Category selector.
    pub category: CategorySelector,
    /// Month selector.
    pub month: MonthSelector,
}

impl Default for ExpenseQuery {
    fn default() -> Self {
        Self::all()
    }
}

impl ExpenseQuery {
    /// The identity query: matches every record.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            category: CategorySelector::All,
            month: MonthSelector::All,
        }
    }

    /// Returns true when the record passes both selectors.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.matches(expense.category) && self.month.matches(expense.date)
    }

    /// Filters a record collection down to the matching subset.
    #[must_use]
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}
