//! Monthly budget settings and budget status evaluation.

pub mod evaluator;
pub mod types;

#[cfg(test)]
mod tests;

pub use evaluator::BudgetEvaluation;
pub use types::{BudgetSettings, BudgetStatus, DEFAULT_CURRENCY};
