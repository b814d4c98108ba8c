//! Infrastructure layer - External systems integration
//!
//! This module handles the relational store:
//! - Connection pool and migrations
//! - The user repository and its SeaORM entity

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
