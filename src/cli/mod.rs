//! CLI module - Command-line interface for the user store.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `ping` - Connectivity check
//! - `user` - Username lookups

pub mod args;

pub use args::{Cli, Commands};
