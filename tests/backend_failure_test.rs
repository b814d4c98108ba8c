//! Failure-path tests driven by SeaORM's mock connection.

use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

use jwt_demo_users::errors::AppError;
use jwt_demo_users::infra::repositories::entities::UserModel;
use jwt_demo_users::infra::{Database, UserRepository, UserStore};

fn outage() -> DbErr {
    DbErr::Conn(RuntimeErr::Internal("connection refused".to_string()))
}

fn row(id: i64, username: &str) -> UserModel {
    UserModel {
        id,
        username: username.to_string(),
        password_hash: "hashed".to_string(),
        role: "user".to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_find_surfaces_backend_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([outage()])
        .into_connection();
    let repo = UserStore::new(db);

    let err = repo.find_by_username("alice").await.unwrap_err();
    assert!(err.is_backend_failure());
    assert!(matches!(err, AppError::Database(DbErr::Conn(_))));
}

#[tokio::test]
async fn test_exists_surfaces_backend_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([outage()])
        .into_connection();
    let repo = UserStore::new(db);

    let err = repo.exists_by_username("alice").await.unwrap_err();
    assert!(err.is_backend_failure());
}

#[tokio::test]
async fn test_failure_is_not_retried() {
    // One error, then a row: a retry would turn the failure into a hit
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([outage()])
        .append_query_results([vec![row(1, "alice")]])
        .into_connection();
    let repo = UserStore::new(db);

    assert!(repo.find_by_username("alice").await.unwrap_err().is_backend_failure());
    let user = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn test_duplicate_rows_raise_integrity_violation() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(1, "alice"), row(2, "alice")]])
        .into_connection();
    let repo = UserStore::new(db);

    let err = repo.find_by_username("alice").await.unwrap_err();
    assert!(matches!(err, AppError::IntegrityViolation(_)));
    assert!(!err.is_backend_failure());
}

#[tokio::test]
async fn test_single_row_maps_to_domain_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(5, "alice")]])
        .into_connection();
    let repo = UserStore::new(db);

    let user = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_ping_surfaces_backend_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_errors([outage()])
        .into_connection();
    let db = Database::from_connection(db);

    assert!(db.ping().await.is_err());
}
