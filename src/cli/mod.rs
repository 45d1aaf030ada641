//! CLI module - Command-line interface for the application.
//!
//! Provides the `migrate` command for database schema management.

pub mod args;

pub use args::{Cli, Commands};
