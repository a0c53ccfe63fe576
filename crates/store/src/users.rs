//! User repository.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use tracing::info;

use spendwise_shared::auth::UserInfo;
use spendwise_shared::types::UserId;
use spendwise_shared::{AppError, AppResult};

use crate::memory::MemoryStore;

/// A stored user document. The password hash never leaves this crate's
/// callers in serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// User ID.
    pub id: UserId,
    /// Email, unique and case-sensitive as stored.
    pub email: String,
    /// Argon2id password hash (PHC format).
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Projects the record into its public wire shape.
    #[must_use]
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Repository for user documents.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: MemoryStore,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Conflict` when the email is already taken
    /// (case-sensitive comparison, matching storage). The email is claimed
    /// atomically through the unique-email index, so concurrent
    /// registrations of the same address resolve to exactly one user.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> AppResult<UserRecord> {
        let record = UserRecord {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.map(ToString::to_string),
            created_at: Utc::now(),
        };

        let collections = self.store.collections();
        match collections.emails.entry(record.email.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::Conflict("User already exists".to_string()));
            }
            Entry::Vacant(slot) => {
                slot.insert(record.id);
            }
        }

        collections.users.insert(record.id, record.clone());
        info!(user_id = %record.id, email = %record.email, "New user registered");
        Ok(record)
    }

    /// Finds a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let collections = self.store.collections();
        Ok(collections
            .emails
            .get(email)
            .and_then(|entry| collections.users.get(entry.value()))
            .map(|entry| entry.value().clone()))
    }

    /// Finds a user by ID.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self
            .store
            .collections()
            .users
            .get(&id)
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = UserRepository::new(MemoryStore::new());
        let user = repo.create("a@b.com", "hash", Some("Ada")).await.unwrap();

        let by_email = repo.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@b.com");
        assert_eq!(by_id.name.as_deref(), Some("Ada"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_registrations_claim_email_once() {
        let repo = UserRepository::new(MemoryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create("dup@example.com", "hash", None).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);

        // The index and the record agree on the single winner.
        let winner = repo.find_by_email("dup@example.com").await.unwrap().unwrap();
        assert_eq!(winner.email, "dup@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = UserRepository::new(MemoryStore::new());
        repo.create("a@b.com", "hash", None).await.unwrap();

        let err = repo.create("a@b.com", "hash2", None).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repo = UserRepository::new(MemoryStore::new());
        repo.create("Ada@b.com", "hash", None).await.unwrap();

        assert!(repo.find_by_email("ada@b.com").await.unwrap().is_none());
        // And so a differently-cased registration is a distinct user.
        assert!(repo.create("ada@b.com", "hash", None).await.is_ok());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let record = UserRecord {
            id: UserId::new(),
            email: "a@b.com".into(),
            password_hash: "secret-hash".into(),
            name: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
