//! Account service - registration and principal loading.
//!
//! Registration validates input, hashes the credential, and delegates
//! persistence to the account store. Principal loading backs an
//! authentication layer's lookup during login.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::config::Config;
use crate::domain::{Password, Principal, User, UserRegistration};
use crate::errors::{AppError, AppResult};
use crate::infra::{AccountStore, NewAccount};

/// Registration capability.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user account
    async fn register_user(&self, registration: UserRegistration) -> AppResult<User>;
}

/// Principal lookup capability for an authentication layer.
///
/// A plain polymorphic seam; no security-framework type is involved.
#[async_trait]
pub trait PrincipalLoader: Send + Sync {
    /// Load the principal for a login identifier (email)
    async fn load_principal_by_identifier(&self, email: &str) -> AppResult<Principal>;
}

/// Concrete implementation of both capabilities over an account store.
pub struct AccountManager<S: AccountStore> {
    store: Arc<S>,
    config: Config,
}

impl<S: AccountStore> AccountManager<S> {
    /// Create a new service instance over a store
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl<S: AccountStore> AccountService for AccountManager<S> {
    async fn register_user(&self, registration: UserRegistration) -> AppResult<User> {
        // Reject malformed input before touching the store
        registration
            .validate()
            .map_err(|e| AppError::invalid_input(format_validation_errors(&e)))?;

        let password_hash = Password::new(&registration.password)?.into_string();

        let account = NewAccount {
            email: registration.email,
            password_hash,
            name: registration.name,
            role: self.config.default_role,
        };

        // The store's unique key is the single authority on duplicates;
        // no pre-check read, so concurrent registrations cannot race past it.
        let user = self.store.insert(account).await.map_err(|e| match e {
            AppError::ConstraintViolation(_) => AppError::DuplicateAccount,
            other => other,
        })?;

        tracing::info!(user_id = %user.id, "registered new account");
        Ok(user)
    }
}

#[async_trait]
impl<S: AccountStore> PrincipalLoader for AccountManager<S> {
    async fn load_principal_by_identifier(&self, email: &str) -> AppResult<Principal> {
        tracing::debug!(email = %email, "loading principal");

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AppError::PrincipalNotFound)?;

        Ok(Principal::from(user))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
