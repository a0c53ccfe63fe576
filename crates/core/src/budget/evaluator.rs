//! Budget status evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::BudgetStatus;

/// Threshold (in percent) at which spending counts as near-budget.
const NEAR_BUDGET_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Result of evaluating monthly spending against a configured budget.
///
/// Pure and deterministic given its two numeric inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEvaluation {
    /// Derived status.
    pub status: BudgetStatus,
    /// Spending as a percentage of budget, capped at 100 for display.
    /// `None` when the budget is unset.
    pub percentage: Option<Decimal>,
    /// Budget minus spending. Negative when over budget; the magnitude of a
    /// negative value is the overage. `None` when the budget is unset.
    pub remaining: Option<Decimal>,
}

impl BudgetEvaluation {
    /// Evaluates monthly spending against a monthly budget.
    ///
    /// A zero budget means "unset": the status is `Unset` and neither
    /// percentage nor remaining is meaningful. Otherwise the displayed
    /// percentage is `min(total / budget * 100, 100)` and status follows the
    /// thresholds: over when total exceeds budget, near from 80% up to (but
    /// not including) 100%, within otherwise. Spending exactly the budget is
    /// within budget.
    #[must_use]
    pub fn evaluate(monthly_total: Decimal, monthly_budget: Decimal) -> Self {
        if monthly_budget.is_zero() {
            return Self {
                status: BudgetStatus::Unset,
                percentage: None,
                remaining: None,
            };
        }

        let raw_percentage = monthly_total / monthly_budget * Decimal::ONE_HUNDRED;
        let capped = raw_percentage.min(Decimal::ONE_HUNDRED);
        let remaining = monthly_budget - monthly_total;

        let status = if monthly_total > monthly_budget {
            BudgetStatus::OverBudget
        } else if raw_percentage >= NEAR_BUDGET_PERCENT && raw_percentage < Decimal::ONE_HUNDRED {
            BudgetStatus::NearBudget
        } else {
            BudgetStatus::WithinBudget
        };

        Self {
            status,
            percentage: Some(capped),
            remaining: Some(remaining),
        }
    }
}
