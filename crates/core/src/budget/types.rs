//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency code used when a user never picked one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A user's monthly budget settings. At most one per user; a zero budget
/// means "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSettings {
    /// Monthly budget amount. Never negative; JSON carries it as a number.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_budget: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            monthly_budget: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl BudgetSettings {
    /// Returns true when no budget has been configured.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.monthly_budget.is_zero()
    }
}

/// Budget status derived from monthly spending vs the configured budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No budget configured.
    Unset,
    /// Spending comfortably below budget.
    WithinBudget,
    /// Spending at 80% or more of budget, but not over.
    NearBudget,
    /// Spending strictly above budget.
    OverBudget,
}
