//! Spending aggregation over expense records.

pub mod types;


pub use types::SpendingSummary;
