//! Account Service - user registration and principal loading
//!
//! A small account capability built on a clean architecture layout:
//! registration hashes the credential and persists through a storage
//! port; an authentication layer loads principals by email through a
//! plain polymorphic seam.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, storage port)
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use account_service::{
//!     AccountManager, AccountService, Config, PrincipalLoader, UserRegistration,
//! };
//! use account_service::infra::{Database, DbAccountStore};
//!
//! # async fn run() -> account_service::AppResult<()> {
//! let config = Config::from_env();
//! let db = Database::connect(&config).await?;
//! let store = Arc::new(DbAccountStore::new(db.get_connection()));
//! let accounts = AccountManager::new(store, config);
//!
//! let user = accounts
//!     .register_user(UserRegistration {
//!         email: "user@example.com".to_string(),
//!         password: "SecurePass123!".to_string(),
//!         name: "Jane Doe".to_string(),
//!     })
//!     .await?;
//!
//! let principal = accounts.load_principal_by_identifier(&user.email).await?;
//! # let _ = principal;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Password, Principal, Role, User, UserRegistration};
pub use errors::{AppError, AppResult};
pub use infra::{AccountStore, DbAccountStore, InMemoryAccountStore, NewAccount};
pub use services::{AccountManager, AccountService, PrincipalLoader};
