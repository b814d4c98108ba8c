//! User command - Username lookups against the store.

use std::sync::Arc;

use crate::cli::args::{UserAction, UserArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserRepository, UserStore};
use crate::services::{UserManager, UserService};

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config).await?;
    let repo = Arc::new(UserStore::new(db.into_connection()));

    println!("{}", run(args.action, repo).await?);
    Ok(())
}

/// Run a lookup and render its output line.
pub async fn run<R>(action: UserAction, repo: Arc<R>) -> AppResult<String>
where
    R: UserRepository + ?Sized,
{
    let service = UserManager::new(repo);

    match action {
        UserAction::Find { username } => {
            let user = service.load_by_username(&username).await?;
            serde_json::to_string_pretty(&user)
                .map_err(|e| AppError::internal(format!("Failed to render user: {}", e)))
        }
        UserAction::Exists { username } => {
            let exists = service.is_username_taken(&username).await?;
            Ok(exists.to_string())
        }
    }
}
