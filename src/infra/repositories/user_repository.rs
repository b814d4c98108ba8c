//! User repository: username lookups over the `users` table.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};
use validator::Validate;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups match the stored username exactly: no case folding and no
/// trimming. An absent row is `Ok(None)`, never an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the user with exactly this username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Check whether any user has exactly this username
    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    /// Find user by primary key
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Insert a new user and return it with its assigned id
    async fn create(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get database connection reference
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        tracing::debug!(username, "Looking up user by username");

        // Two rows are enough to tell a unique hit from a duplicate
        let mut models = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .order_by_asc(user::Column::Id)
            .limit(2)
            .all(&self.db)
            .await?;

        if models.len() > 1 {
            tracing::warn!(username, "Multiple users share one username");
            return Err(AppError::integrity(format!(
                "more than one user with username '{}'",
                username
            )));
        }

        Ok(models.pop().map(User::from))
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        tracing::debug!(username, "Checking username existence");

        let id = UserEntity::find()
            .select_only()
            .column(user::Column::Id)
            .filter(user::Column::Username.eq(username))
            .into_tuple::<i64>()
            .one(&self.db)
            .await?;

        Ok(id.is_some())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        new_user
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let active_model = ActiveModel {
            id: NotSet,
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            role: Set(String::from(new_user.role)),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        tracing::debug!(id = model.id, "User inserted");

        Ok(User::from(model))
    }
}

fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Username"),
        _ => AppError::from(err),
    }
}
