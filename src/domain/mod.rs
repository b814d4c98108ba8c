//! Domain layer - Core business entities
//!
//! This module contains the user model as the rest of the
//! authentication system sees it, independent of the persistence layer.

pub mod user;

pub use user::{NewUser, User, UserRole};
