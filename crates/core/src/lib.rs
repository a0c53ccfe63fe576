//! Core business logic for Spendwise.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `expense` - Expense records, categories, and input validation
//! - `filter` - Category/month selectors and the record filter engine
//! - `summary` - Spending aggregation (totals, averages, category breakdown)
//! - `budget` - Monthly budget settings and budget status evaluation
//! - `auth` - Password hashing

pub mod auth;
pub mod budget;
pub mod expense;
pub mod filter;
pub mod summary;
