//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Administrative tool for the user store of the JWT demo
#[derive(Parser, Debug)]
#[command(name = "users-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides DATABASE_URL from the environment)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Check database connectivity
    Ping,

    /// Query users by username
    User(UserArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

/// User lookup actions
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Print the user with exactly this username as JSON
    Find {
        /// Username, matched case- and whitespace-sensitively
        username: String,
    },
    /// Print whether a user with exactly this username exists
    Exists {
        /// Username, matched case- and whitespace-sensitively
        username: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_user_find_keeps_username_verbatim() {
        let cli = Cli::parse_from(["users-admin", "user", "find", " Alice "]);
        match cli.command {
            Commands::User(UserArgs {
                action: UserAction::Find { username },
            }) => assert_eq!(username, " Alice "),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "users-admin",
            "migrate",
            "up",
            "--verbose",
            "--database-url",
            "sqlite::memory:",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Up
            })
        ));
    }
}
