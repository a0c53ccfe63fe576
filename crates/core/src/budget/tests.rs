//! Unit and property tests for budget evaluation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::evaluator::BudgetEvaluation;
use super::types::{BudgetSettings, BudgetStatus};

#[test]
fn test_zero_budget_is_unset() {
    let eval = BudgetEvaluation::evaluate(dec!(50), Decimal::ZERO);
    assert_eq!(eval.status, BudgetStatus::Unset);
    assert!(eval.percentage.is_none());
    assert!(eval.remaining.is_none());
}

#[test]
fn test_over_budget_caps_percentage_and_reports_overage() {
    let eval = BudgetEvaluation::evaluate(dec!(120), dec!(100));
    assert_eq!(eval.status, BudgetStatus::OverBudget);
    assert_eq!(eval.percentage, Some(dec!(100)));
    assert_eq!(eval.remaining, Some(dec!(-20)));
}

#[test]
fn test_near_budget_at_85_percent() {
    let eval = BudgetEvaluation::evaluate(dec!(85), dec!(100));
    assert_eq!(eval.status, BudgetStatus::NearBudget);
    assert_eq!(eval.percentage, Some(dec!(85)));
    assert_eq!(eval.remaining, Some(dec!(15)));
}

#[test]
fn test_within_budget_at_half() {
    let eval = BudgetEvaluation::evaluate(dec!(50), dec!(100));
    assert_eq!(eval.status, BudgetStatus::WithinBudget);
    assert_eq!(eval.percentage, Some(dec!(50)));
    assert_eq!(eval.remaining, Some(dec!(50)));
}

#[test]
fn test_threshold_edges() {
    // 80% is the first near-budget point.
    assert_eq!(
        BudgetEvaluation::evaluate(dec!(80), dec!(100)).status,
        BudgetStatus::NearBudget
    );
    assert_eq!(
        BudgetEvaluation::evaluate(dec!(79.99), dec!(100)).status,
        BudgetStatus::WithinBudget
    );
    // Exactly at budget is not over and not near.
    assert_eq!(
        BudgetEvaluation::evaluate(dec!(100), dec!(100)).status,
        BudgetStatus::WithinBudget
    );
    // A cent over tips it.
    assert_eq!(
        BudgetEvaluation::evaluate(dec!(100.01), dec!(100)).status,
        BudgetStatus::OverBudget
    );
}

#[test]
fn test_settings_default_is_unset_usd() {
    let settings = BudgetSettings::default();
    assert!(settings.is_unset());
    assert_eq!(settings.currency, "USD");
}

proptest! {
    /// Remaining is always budget minus total, and the displayed percentage
    /// never exceeds 100.
    #[test]
    fn test_remaining_and_cap(
        total_cents in 0i64..1_000_000_00,
        budget_cents in 1i64..1_000_000_00,
    ) {
        let total = Decimal::new(total_cents, 2);
        let budget = Decimal::new(budget_cents, 2);

        let eval = BudgetEvaluation::evaluate(total, budget);

        prop_assert_eq!(eval.remaining, Some(budget - total));
        let percentage = eval.percentage.unwrap();
        prop_assert!(percentage <= Decimal::ONE_HUNDRED);

        // Status agrees with the sign of remaining.
        match eval.status {
            BudgetStatus::OverBudget => prop_assert!(total > budget),
            BudgetStatus::Unset => prop_assert!(false, "budget was nonzero"),
            _ => prop_assert!(total <= budget),
        }
    }

    /// Evaluation is deterministic.
    #[test]
    fn test_deterministic(
        total_cents in 0i64..1_000_000_00,
        budget_cents in 0i64..1_000_000_00,
    ) {
        let total = Decimal::new(total_cents, 2);
        let budget = Decimal::new(budget_cents, 2);
        prop_assert_eq!(
            BudgetEvaluation::evaluate(total, budget),
            BudgetEvaluation::evaluate(total, budget)
        );
    }
}
