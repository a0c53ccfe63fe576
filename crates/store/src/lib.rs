//! Owner-scoped document store boundary.
//!
//! Persistence is an external collaborator reached through create/read/
//! update/delete calls keyed by owning-user identifier. This crate provides
//! that boundary: a concurrent in-memory document store plus repositories
//! exposing exactly the CRUD contract the rest of the system consumes. The
//! repositories never leak another user's records.

pub mod budgets;
pub mod expenses;
pub mod memory;
pub mod users;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use memory::MemoryStore;
pub use users::{UserRecord, UserRepository};
