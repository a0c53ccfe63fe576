//! Category/month selectors and the record filter engine.

pub mod engine;
pub mod selector;

#[cfg(test)]
mod props;

pub use engine::ExpenseQuery;
pub use selector::{CategorySelector, MonthSelector, SelectorError, YearMonth};
