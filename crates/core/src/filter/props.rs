//! Property-based tests for the filter engine.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::expense::{Category, Expense};
use crate::filter::{CategorySelector, ExpenseQuery, MonthSelector, YearMonth};
use spendwise_shared::types::{ExpenseId, UserId};

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn expense_strategy() -> impl Strategy<Value = Expense> {
    (
        category_strategy(),
        1i64..100_000_00,
        2020i32..2030,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(category, cents, year, month, day)| Expense {
            id: ExpenseId::new(),
            title: "expense".into(),
            category,
            amount: Decimal::new(cents, 2),
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            user_id: UserId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
}

fn query_strategy() -> impl Strategy<Value = ExpenseQuery> {
    (
        prop_oneof![
            Just(CategorySelector::All),
            category_strategy().prop_map(CategorySelector::Only),
        ],
        prop_oneof![
            Just(MonthSelector::All),
            (2020i32..2030, 1u32..=12)
                .prop_map(|(year, month)| MonthSelector::Month(YearMonth { year, month })),
        ],
    )
        .prop_map(|(category, month)| ExpenseQuery { category, month })
}

proptest! {
    /// Identity law: filtering with "all"/"all" returns the input unchanged.
    #[test]
    fn test_identity_filter(records in prop::collection::vec(expense_strategy(), 0..50)) {
        prop_assert_eq!(ExpenseQuery::all().apply(&records), records);
    }

    /// Subset law: every output record satisfies both selectors, and the
    /// output is a stable subsequence of the input.
    #[test]
    fn test_subset_and_order(
        records in prop::collection::vec(expense_strategy(), 0..50),
        query in query_strategy(),
    ) {
        let result = query.apply(&records);

        for expense in &result {
            prop_assert!(query.matches(expense));
        }

        // Stable subsequence: matching input ids in order equal output ids.
        let expected: Vec<_> = records
            .iter()
            .filter(|e| query.matches(e))
            .map(|e| e.id)
            .collect();
        let actual: Vec<_> = result.iter().map(|e| e.id).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Idempotence: filtering a filtered result changes nothing.
    #[test]
    fn test_idempotent(
        records in prop::collection::vec(expense_strategy(), 0..50),
        query in query_strategy(),
    ) {
        let once = query.apply(&records);
        let twice = query.apply(&once);
        prop_assert_eq!(once, twice);
    }
}
