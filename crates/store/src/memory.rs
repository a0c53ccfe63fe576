//! Concurrent in-memory document store.

use std::sync::Arc;

use dashmap::DashMap;

use spendwise_core::budget::BudgetSettings;
use spendwise_core::expense::Expense;
use spendwise_shared::types::{ExpenseId, UserId};

use crate::users::UserRecord;

/// Shared in-memory document collections.
///
/// Cloning is cheap; all clones view the same underlying maps. The maps are
/// safe to reach from concurrent request handlers without external locking.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Collections>,
}

#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) users: DashMap<UserId, UserRecord>,
    /// Unique-email index. An email is claimed through this map's entry
    /// API before the user record exists, so two concurrent registrations
    /// can never both win.
    pub(crate) emails: DashMap<String, UserId>,
    pub(crate) expenses: DashMap<ExpenseId, Expense>,
    /// At most one budget per user; upsert keyed by owner.
    pub(crate) budgets: DashMap<UserId, BudgetSettings>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn collections(&self) -> &Collections {
        &self.inner
    }
}
