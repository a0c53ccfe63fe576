//! Expense input validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Category;

/// Maximum allowed title length in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Validation failures for expense input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// Title is empty or whitespace.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Title exceeds the length limit.
    #[error("title must be at most {MAX_TITLE_LEN} characters")]
    TitleTooLong,

    /// Amount is zero or negative.
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Validated input for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Trimmed title.
    pub title: String,
    /// Category (unrecognized names already mapped to `Other`).
    pub category: Category,
    /// Positive amount.
    pub amount: Decimal,
    /// Expense date.
    pub date: NaiveDate,
}

impl CreateExpenseInput {
    /// Validates raw field values into a well-formed input.
    ///
    /// The category is parsed leniently: any unrecognized name becomes
    /// `Other`. The date must be a `YYYY-MM-DD` calendar date.
    ///
    /// # Errors
    ///
    /// Returns an `ExpenseError` describing the first violated rule.
    pub fn parse(
        title: &str,
        category: &str,
        amount: Decimal,
        date: &str,
    ) -> Result<Self, ExpenseError> {
        let title = validate_title(title)?;
        let amount = validate_amount(amount)?;
        let date = parse_date(date)?;

        Ok(Self {
            title,
            category: Category::parse_lenient(category),
            amount,
            date,
        })
    }
}

/// Validated partial update for an expense. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    /// New title, if changed.
    pub title: Option<String>,
    /// New category, if changed.
    pub category: Option<Category>,
    /// New amount, if changed.
    pub amount: Option<Decimal>,
    /// New date, if changed.
    pub date: Option<NaiveDate>,
}

impl UpdateExpenseInput {
    /// Validates raw optional field values into a partial update.
    ///
    /// # Errors
    ///
    /// Returns an `ExpenseError` describing the first violated rule.
    pub fn parse(
        title: Option<&str>,
        category: Option<&str>,
        amount: Option<Decimal>,
        date: Option<&str>,
    ) -> Result<Self, ExpenseError> {
        Ok(Self {
            title: title.map(validate_title).transpose()?,
            category: category.map(Category::parse_lenient),
            amount: amount.map(validate_amount).transpose()?,
            date: date.map(parse_date).transpose()?,
        })
    }

    /// Returns true when no field is being changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }
}

fn validate_title(title: &str) -> Result<String, ExpenseError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ExpenseError::EmptyTitle);
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(ExpenseError::TitleTooLong);
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Decimal) -> Result<Decimal, ExpenseError> {
    if amount <= Decimal::ZERO {
        return Err(ExpenseError::NonPositiveAmount);
    }
    Ok(amount)
}

fn parse_date(date: &str) -> Result<NaiveDate, ExpenseError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ExpenseError::InvalidDate(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_valid_input() {
        let input = CreateExpenseInput::parse("  Lunch ", "Food", dec!(12.50), "2024-11-05")
            .unwrap();
        assert_eq!(input.title, "Lunch");
        assert_eq!(input.category, Category::Food);
        assert_eq!(input.amount, dec!(12.50));
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 11, 5).unwrap());
    }

    #[test]
    fn test_unrecognized_category_defaults_to_other() {
        let input = CreateExpenseInput::parse("Coffee", "Snacks", dec!(3), "2024-11-05").unwrap();
        assert_eq!(input.category, Category::Other);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_title_rejected(#[case] title: &str) {
        let result = CreateExpenseInput::parse(title, "Food", dec!(1), "2024-11-05");
        assert_eq!(result.unwrap_err(), ExpenseError::EmptyTitle);
    }

    #[test]
    fn test_long_title_rejected() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        let result = CreateExpenseInput::parse(&title, "Food", dec!(1), "2024-11-05");
        assert_eq!(result.unwrap_err(), ExpenseError::TitleTooLong);

        let title = "x".repeat(MAX_TITLE_LEN);
        assert!(CreateExpenseInput::parse(&title, "Food", dec!(1), "2024-11-05").is_ok());
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-5))]
    fn test_non_positive_amount_rejected(#[case] amount: Decimal) {
        let result = CreateExpenseInput::parse("Lunch", "Food", amount, "2024-11-05");
        assert_eq!(result.unwrap_err(), ExpenseError::NonPositiveAmount);
    }

    #[rstest]
    #[case("2024-13-01")]
    #[case("2024-02-30")]
    #[case("not-a-date")]
    #[case("2024/11/05")]
    fn test_malformed_date_rejected(#[case] date: &str) {
        let result = CreateExpenseInput::parse("Lunch", "Food", dec!(1), date);
        assert!(matches!(result, Err(ExpenseError::InvalidDate(_))));
    }

    #[test]
    fn test_update_empty_when_no_fields() {
        let update = UpdateExpenseInput::parse(None, None, None, None).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_validates_present_fields() {
        let result = UpdateExpenseInput::parse(Some(""), None, None, None);
        assert_eq!(result.unwrap_err(), ExpenseError::EmptyTitle);

        let result = UpdateExpenseInput::parse(None, None, Some(dec!(-1)), None);
        assert_eq!(result.unwrap_err(), ExpenseError::NonPositiveAmount);

        let update =
            UpdateExpenseInput::parse(Some("Dinner"), Some("Transport"), None, Some("2024-12-01"))
                .unwrap();
        assert_eq!(update.title.as_deref(), Some("Dinner"));
        assert_eq!(update.category, Some(Category::Transport));
        assert!(!update.is_empty());
    }
}
