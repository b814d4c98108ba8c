//! Application services layer - Use cases over the repository.
//!
//! Services depend on the repository trait, not on SeaORM, so they can
//! be exercised with `MockUserRepository`.

mod user_service;

pub use user_service::{UserManager, UserService};
