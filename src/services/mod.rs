//! Services layer - Application use cases
//!
//! Services orchestrate domain logic over the infrastructure ports.

pub mod account_service;

pub use account_service::{AccountManager, AccountService, PrincipalLoader};
