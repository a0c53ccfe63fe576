//! Expense record types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use spendwise_shared::types::{ExpenseId, UserId};

/// Fixed expense classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Food and groceries.
    Food,
    /// Transport and travel.
    Transport,
    /// Utilities and recurring bills.
    Utilities,
    /// Everything else.
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Food, Self::Transport, Self::Utilities, Self::Other];

    /// Parses a category name, mapping unrecognized values to `Other`.
    ///
    /// Applied at creation time only; filter parsing is strict (see
    /// `filter::CategorySelector`).
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_name(s).unwrap_or(Self::Other)
    }

    /// Parses an exact category name.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Food" => Some(Self::Food),
            "Transport" => Some(Self::Transport),
            "Utilities" => Some(Self::Utilities),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns the category's display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single expense record.
///
/// Dates are plain calendar dates with no time-of-day semantics; month
/// bucketing therefore has no time-zone sensitivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Short description.
    pub title: String,
    /// Expense category.
    pub category: Category,
    /// Amount spent. Always positive; JSON carries it as a number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Calendar date of the expense.
    pub date: NaiveDate,
    /// Owning user.
    pub user_id: UserId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Food", Category::Food)]
    #[case("Transport", Category::Transport)]
    #[case("Utilities", Category::Utilities)]
    #[case("Other", Category::Other)]
    fn test_from_name_exact(#[case] name: &str, #[case] expected: Category) {
        assert_eq!(Category::from_name(name), Some(expected));
        assert_eq!(expected.as_str(), name);
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Category::from_name("food"), None);
        assert_eq!(Category::from_name("FOOD"), None);
    }

    #[rstest]
    #[case("Groceries")]
    #[case("")]
    #[case("food")]
    fn test_parse_lenient_defaults_to_other(#[case] name: &str) {
        assert_eq!(Category::parse_lenient(name), Category::Other);
    }

    #[test]
    fn test_expense_wire_shape() {
        let expense = Expense {
            id: ExpenseId::new(),
            title: "Lunch".into(),
            category: Category::Food,
            amount: dec!(12.50),
            date: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            user_id: UserId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["category"], "Food");
        assert_eq!(json["date"], "2024-11-05");
        // Amounts cross the wire as JSON numbers, not strings.
        assert!(json["amount"].is_number());
        assert!(json.get("userId").is_some());
    }
}
