//! Ping command - Database connectivity check.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the ping command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config).await?;
    db.ping().await?;

    println!("ok");
    Ok(())
}
