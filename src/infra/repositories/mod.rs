//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod account_store;
pub(crate) mod entities;
mod memory;

pub use account_store::{AccountStore, DbAccountStore, NewAccount};
pub use memory::InMemoryAccountStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use account_store::MockAccountStore;
