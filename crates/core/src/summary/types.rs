//! Spending summary computation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::{Category, Expense};
use crate::filter::YearMonth;

/// Aggregated spending metrics over a record collection.
///
/// All fields keep exact decimal cents; rounding happens at presentation
/// time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingSummary {
    /// Sum of all amounts.
    pub total_spending: Decimal,
    /// Total divided by record count; zero for an empty collection.
    pub average_spending: Decimal,
    /// Per-category sums. Keys are present only for categories that occur.
    pub category_totals: BTreeMap<Category, Decimal>,
    /// Sum over records dated in the reference month.
    pub monthly_total: Decimal,
    /// Number of distinct categories that occur.
    pub distinct_category_count: usize,
}

impl SpendingSummary {
    /// Computes the summary for a record collection.
    ///
    /// `today` drives the "current month" bucket for `monthly_total`. It is
    /// an explicit parameter rather than a system-clock read, so the
    /// computation is deterministic and needs no mocking to test.
    #[must_use]
    pub fn compute(expenses: &[Expense], today: NaiveDate) -> Self {
        let current_month = YearMonth::of(today);

        let mut total_spending = Decimal::ZERO;
        let mut monthly_total = Decimal::ZERO;
        let mut category_totals: BTreeMap<Category, Decimal> = BTreeMap::new();

        for expense in expenses {
            total_spending += expense.amount;
            *category_totals.entry(expense.category).or_default() += expense.amount;
            if current_month.contains(expense.date) {
                monthly_total += expense.amount;
            }
        }

        let average_spending = if expenses.is_empty() {
            Decimal::ZERO
        } else {
            total_spending / Decimal::from(expenses.len())
        };

        Self {
            total_spending,
            average_spending,
            distinct_category_count: category_totals.len(),
            category_totals,
            monthly_total,
        }
    }
}
