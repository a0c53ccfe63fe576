//! Expense records, categories, and input validation.

pub mod types;
pub mod validation;

pub use types::{Category, Expense};
pub use validation::{CreateExpenseInput, ExpenseError, UpdateExpenseInput, MAX_TITLE_LEN};
