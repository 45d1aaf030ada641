//! Account storage port and its database-backed implementation.
//!
//! The port exposes only the operations the service actually uses:
//! lookup by unique email, keyed lookup, and insert-with-uniqueness.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::{Role, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// New account record handed to the store.
///
/// The store assigns the identifier and timestamps on insert.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

/// Storage port for user accounts.
///
/// Every implementation must make the uniqueness check and the insert
/// atomic: two concurrent inserts with the same email may never both
/// succeed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Exact-match lookup on the unique email field.
    ///
    /// Absence is `Ok(None)`, not an error.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Keyed lookup by identifier.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Persist a new record, assigning identifier and timestamps.
    ///
    /// Fails with `ConstraintViolation` when the email already exists.
    async fn insert(&self, account: NewAccount) -> AppResult<User>;
}

/// SeaORM-backed account store.
///
/// Atomicity of the uniqueness check comes from the unique index on
/// the email column; a violated insert surfaces as `ConstraintViolation`.
pub struct DbAccountStore {
    db: DatabaseConnection,
}

impl DbAccountStore {
    /// Create a new store over an established connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for DbAccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, account: NewAccount) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            name: Set(account.name),
            role: Set(account.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_insert_err)?;

        Ok(User::from(model))
    }
}

/// Translate a unique-key insert failure into the store's
/// constraint-violation report; everything else stays a database error.
fn map_insert_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::ConstraintViolation(msg),
        _ => AppError::Database(err),
    }
}
