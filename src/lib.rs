//! User store for the JWT demo service.
//!
//! The authentication layer looks users up by username through a narrow
//! repository backed by a relational database (SeaORM).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface of the `users-admin` binary
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The user entity as callers see it
//! - **services**: Registration and lookup use cases
//! - **infra**: Database pool, migrations and the user repository
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Apply migrations
//! cargo run -- migrate up
//!
//! # Look up a user
//! cargo run -- user find alice
//! cargo run -- user exists alice
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
pub use domain::{NewUser, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::{Database, UserRepository, UserStore};
pub use services::{UserManager, UserService};
