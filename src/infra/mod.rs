//! Infrastructure layer - External systems integration
//!
//! This module handles database connections, schema migrations, and
//! the account storage implementations.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{AccountStore, DbAccountStore, InMemoryAccountStore, NewAccount};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockAccountStore;
