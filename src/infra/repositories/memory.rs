//! In-memory implementation of the account store.
//!
//! Backs integration tests and embedded use; the uniqueness check and
//! insert happen under a single write lock, so the store keeps the same
//! atomicity guarantee as the database-backed implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use super::account_store::{AccountStore, NewAccount};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// In-memory account store implementation
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryAccountStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| AppError::internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(accounts.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| AppError::internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(accounts.get(&id).cloned())
    }

    async fn insert(&self, account: NewAccount) -> AppResult<User> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| AppError::internal(format!("Failed to acquire write lock: {}", e)))?;

        if accounts.values().any(|u| u.email == account.email) {
            return Err(AppError::ConstraintViolation(format!(
                "email '{}' already exists",
                account.email
            )));
        }

        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: account.email,
            password_hash: account.password_hash,
            name: account.name,
            role: account.role,
            created_at: now,
            updated_at: now,
        };

        accounts.insert(user.id, user.clone());
        Ok(user)
    }
}
