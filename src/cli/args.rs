//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Clinic Records - patients, professionals, consultations and medical records
#[derive(Parser, Debug)]
#[command(name = "clinic-records")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (applies pending migrations first)
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
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
    /// Drop all tables and re-run every migration
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["clinic-records", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, DEFAULT_SERVER_PORT);
                assert_eq!(args.host, DEFAULT_SERVER_HOST);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_migrate_subcommand() {
        let cli = Cli::try_parse_from(["clinic-records", "-v", "migrate", "status"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }
}
