//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Users Service - user registry microservice
#[derive(Parser, Debug)]
#[command(name = "users-service")]
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
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_flags_are_optional_overrides() {
        let cli = Cli::try_parse_from(["users-service", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.host, None);
        assert_eq!(args.port, None);

        let cli = Cli::try_parse_from(["users-service", "serve", "--port", "8080"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(8080));
    }

    #[test]
    fn migrate_accepts_up_and_down_only() {
        let cli = Cli::try_parse_from(["users-service", "migrate", "up"]).unwrap();
        let Commands::Migrate(args) = cli.command else {
            panic!("expected migrate command");
        };
        assert!(matches!(args.action, MigrateAction::Up));

        let cli = Cli::try_parse_from(["users-service", "migrate", "down"]).unwrap();
        let Commands::Migrate(args) = cli.command else {
            panic!("expected migrate command");
        };
        assert!(matches!(args.action, MigrateAction::Down));

        assert!(Cli::try_parse_from(["users-service", "migrate", "status"]).is_err());
    }
}
