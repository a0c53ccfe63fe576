//! Expense repository. All reads and writes are owner-scoped.

use chrono::Utc;
use tracing::info;

use spendwise_core::expense::{CreateExpenseInput, Expense, UpdateExpenseInput};
use spendwise_shared::types::{ExpenseId, UserId};
use spendwise_shared::{AppError, AppResult};

use crate::memory::MemoryStore;

/// Repository for expense documents.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    store: MemoryStore,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Creates an expense owned by `user_id`.
    pub async fn create(&self, user_id: UserId, input: CreateExpenseInput) -> AppResult<Expense> {
        let now = Utc::now();
        let expense = Expense {
            id: ExpenseId::new(),
            title: input.title,
            category: input.category,
            amount: input.amount,
            date: input.date,
            user_id,
            created_at: now,
            updated_at: now,
        };
        self.store
            .collections()
            .expenses
            .insert(expense.id, expense.clone());
        info!(expense_id = %expense.id, user_id = %user_id, "Expense created");
        Ok(expense)
    }

    /// Lists all expenses owned by `user_id`, sorted by date descending
    /// (most recent first, creation time as tiebreaker).
    pub async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Expense>> {
        let mut expenses: Vec<Expense> = self
            .store
            .collections()
            .expenses
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Finds one expense, owner-scoped.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the expense is absent or owned by
    /// another user; the two cases are indistinguishable to the caller.
    pub async fn find(&self, id: ExpenseId, user_id: UserId) -> AppResult<Expense> {
        self.store
            .collections()
            .expenses
            .get(&id)
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))
    }

    /// Applies a partial update to an owned expense, returning the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the expense is absent or owned by
    /// another user.
    pub async fn update(
        &self,
        id: ExpenseId,
        user_id: UserId,
        changes: UpdateExpenseInput,
    ) -> AppResult<Expense> {
        let mut entry = self
            .store
            .collections()
            .expenses
            .get_mut(&id)
            .filter(|entry| entry.value().user_id == user_id)
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

        let expense = entry.value_mut();
        if let Some(title) = changes.title {
            expense.title = title;
        }
        if let Some(category) = changes.category {
            expense.category = category;
        }
        if let Some(amount) = changes.amount {
            expense.amount = amount;
        }
        if let Some(date) = changes.date {
            expense.date = date;
        }
        expense.updated_at = Utc::now();

        Ok(expense.clone())
    }

    /// Deletes an owned expense. Hard delete; there is no soft-delete.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the expense is absent or owned by
    /// another user.
    pub async fn delete(&self, id: ExpenseId, user_id: UserId) -> AppResult<()> {
        let removed = self
            .store
            .collections()
            .expenses
            .remove_if(&id, |_, expense| expense.user_id == user_id);

        match removed {
            Some(_) => {
                info!(expense_id = %id, user_id = %user_id, "Expense deleted");
                Ok(())
            }
            None => Err(AppError::NotFound("Expense not found".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use spendwise_core::expense::Category;

    fn input(title: &str, date: &str) -> CreateExpenseInput {
        CreateExpenseInput::parse(title, "Food", dec!(10), date).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_sorted_date_desc() {
        let repo = ExpenseRepository::new(MemoryStore::new());
        let user = UserId::new();

        repo.create(user, input("old", "2024-10-01")).await.unwrap();
        repo.create(user, input("new", "2024-11-06")).await.unwrap();
        repo.create(user, input("mid", "2024-11-01")).await.unwrap();

        let titles: Vec<String> = repo
            .list_for_user(user)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_listing_is_owner_scoped() {
        let repo = ExpenseRepository::new(MemoryStore::new());
        let alice = UserId::new();
        let bob = UserId::new();

        repo.create(alice, input("alice's", "2024-11-01")).await.unwrap();

        assert_eq!(repo.list_for_user(alice).await.unwrap().len(), 1);
        assert!(repo.list_for_user(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let repo = ExpenseRepository::new(MemoryStore::new());
        let user = UserId::new();
        let expense = repo.create(user, input("lunch", "2024-11-01")).await.unwrap();

        let changes = UpdateExpenseInput {
            amount: Some(dec!(25.75)),
            category: Some(Category::Transport),
            ..UpdateExpenseInput::default()
        };
        let updated = repo.update(expense.id, user, changes).await.unwrap();

        assert_eq!(updated.title, "lunch");
        assert_eq!(updated.amount, dec!(25.75));
        assert_eq!(updated.category, Category::Transport);
        assert_eq!(updated.date, expense.date);
        assert!(updated.updated_at >= expense.updated_at);
    }

    #[tokio::test]
    async fn test_update_foreign_expense_is_not_found() {
        let repo = ExpenseRepository::new(MemoryStore::new());
        let alice = UserId::new();
        let bob = UserId::new();
        let expense = repo.create(alice, input("alice's", "2024-11-01")).await.unwrap();

        let err = repo
            .update(expense.id, bob, UpdateExpenseInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // And the owner's record is untouched.
        assert_eq!(repo.find(expense.id, alice).await.unwrap().title, "alice's");
    }

    #[tokio::test]
    async fn test_delete_foreign_expense_is_not_found() {
        let repo = ExpenseRepository::new(MemoryStore::new());
        let alice = UserId::new();
        let bob = UserId::new();
        let expense = repo.create(alice, input("alice's", "2024-11-01")).await.unwrap();

        assert!(repo.delete(expense.id, bob).await.is_err());
        assert!(repo.delete(expense.id, alice).await.is_ok());
        assert!(repo.find(expense.id, alice).await.is_err());
    }
}
