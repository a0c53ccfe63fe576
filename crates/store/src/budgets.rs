//! Budget repository. One budget document per user, upsert semantics.

use rust_decimal::Decimal;
use tracing::info;

use spendwise_core::budget::{BudgetSettings, DEFAULT_CURRENCY};
use spendwise_shared::AppResult;
use spendwise_shared::types::UserId;

use crate::memory::MemoryStore;

/// Repository for budget documents.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    store: MemoryStore,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Returns the user's budget, or `None` when never saved.
    pub async fn get(&self, user_id: UserId) -> AppResult<Option<BudgetSettings>> {
        Ok(self
            .store
            .collections()
            .budgets
            .get(&user_id)
            .map(|entry| entry.value().clone()))
    }

    /// Creates or updates the user's budget in place.
    ///
    /// The budget is created lazily on first save. A `None` currency keeps
    /// the existing currency, or the default for a fresh budget.
    pub async fn upsert(
        &self,
        user_id: UserId,
        monthly_budget: Decimal,
        currency: Option<&str>,
    ) -> AppResult<BudgetSettings> {
        let budgets = &self.store.collections().budgets;
        let mut entry = budgets.entry(user_id).or_insert_with(BudgetSettings::default);

        let settings = entry.value_mut();
        settings.monthly_budget = monthly_budget;
        if let Some(currency) = currency {
            settings.currency = currency.to_string();
        } else if settings.currency.is_empty() {
            settings.currency = DEFAULT_CURRENCY.to_string();
        }
        let saved = settings.clone();
        drop(entry);

        info!(user_id = %user_id, monthly_budget = %saved.monthly_budget, "Budget saved");
        Ok(saved)
    }
}
