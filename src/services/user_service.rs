//! User service - the authentication layer's view of the user store.
//!
//! Translates an absent lookup into `NotFound` and guards registration
//! with an existence check. Backend failures pass through unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user; fails with `Conflict` when the username is taken
    async fn register(&self, new_user: NewUser) -> AppResult<User>;

    /// Load a user for authentication; fails with `NotFound` when absent
    async fn load_by_username(&self, username: &str) -> AppResult<User>;

    /// Check whether a username is already registered
    async fn is_username_taken(&self, username: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository + ?Sized> UserService for UserManager<R> {
    async fn register(&self, new_user: NewUser) -> AppResult<User> {
        // Advisory only; the unique index decides under concurrent inserts
        if self.repo.exists_by_username(&new_user.username).await? {
            return Err(AppError::conflict("Username"));
        }

        let user = self.repo.create(new_user).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn load_by_username(&self, username: &str) -> AppResult<User> {
        self.repo.find_by_username(username).await?.ok_or_not_found()
    }

    async fn is_username_taken(&self, username: &str) -> AppResult<bool> {
        self.repo.exists_by_username(username).await
    }
}
