//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_USER};

/// User roles enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => ROLE_ADMIN.to_string(),
            UserRole::User => ROLE_USER.to_string(),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity
///
/// `username` is unique across the store; `id` is assigned by the
/// database on insert and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Registration payload handed to the repository.
///
/// The password must already be hashed by the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 255, message = "Username must be 1 to 255 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password hash must not be empty"))]
    pub password_hash: String,
    #[serde(default)]
    pub role: UserRole,
}

impl NewUser {
    /// Create a registration payload with the default role
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role: UserRole::User,
        }
    }

    /// Override the role
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_text() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        assert_eq!(String::from(UserRole::Admin), "admin");
    }

    #[test]
    fn test_unknown_role_reads_as_user() {
        assert_eq!(UserRole::from("superuser"), UserRole::User);
        assert_eq!(UserRole::from("Admin"), UserRole::User);
    }

    #[test]
    fn test_new_user_validation() {
        assert!(NewUser::new("alice", "hash").validate().is_ok());
        assert!(NewUser::new("", "hash").validate().is_err());
        assert!(NewUser::new("alice", "").validate().is_err());
        assert!(NewUser::new("a".repeat(256), "hash").validate().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "secret-hash".to_string(),
            role: UserRole::Admin,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"username\":\"alice\""));
        assert!(json.contains("\"role\":\"admin\""));
        assert!(!json.contains("secret-hash"));
        assert!(user.is_admin());
    }
}
