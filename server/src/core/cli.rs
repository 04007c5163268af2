use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::TransactionalBackend;
use super::constants::{
    ENV_CONFIG, ENV_CORS_ORIGINS, ENV_HOST, ENV_PORT, ENV_POSTGRES_URL, ENV_TRANSACTIONAL_BACKEND,
};

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(version, about = "Job board API server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Allowed CORS origins, comma-separated (any origin when unset)
    #[arg(long, global = true, env = ENV_CORS_ORIGINS, value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Transactional database backend (sqlite or postgres)
    #[arg(long, global = true, env = ENV_TRANSACTIONAL_BACKEND, value_parser = parse_transactional_backend)]
    pub transactional_backend: Option<TransactionalBackend>,

    /// PostgreSQL connection URL (when using postgres backend)
    #[arg(long, global = true, env = ENV_POSTGRES_URL)]
    pub postgres_url: Option<String>,
}

/// Parse transactional backend from CLI/env string
fn parse_transactional_backend(s: &str) -> Result<TransactionalBackend, String> {
    match s.to_lowercase().as_str() {
        "sqlite" => Ok(TransactionalBackend::Sqlite),
        "postgres" | "postgresql" => Ok(TransactionalBackend::Postgres),
        _ => Err(format!(
            "Invalid transactional backend '{}'. Valid options: sqlite, postgres",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// System maintenance commands
    System {
        #[command(subcommand)]
        command: SystemCommands,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum SystemCommands {
    /// Delete the local data directory (SQLite database). Requires confirmation.
    Prune {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub cors_origins: Option<Vec<String>>,
    pub transactional_backend: Option<TransactionalBackend>,
    pub postgres_url: Option<String>,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            config: cli.config,
            cors_origins: cli.cors_origins,
            transactional_backend: cli.transactional_backend,
            postgres_url: cli.postgres_url,
        }
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let mut cli = Cli::parse();
    let command = cli.command.take();
    (cli.into(), command)
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
    fn test_parse_start_with_flags() {
        let cli = Cli::try_parse_from([
            "jobboard",
            "start",
            "--port",
            "9000",
            "--cors-origins",
            "http://localhost:3000,https://jobs.example.com",
            "--transactional-backend",
            "postgresql",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Start)));
        let config = CliConfig::from(cli);
        assert_eq!(config.port, Some(9000));
        assert_eq!(
            config.cors_origins,
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://jobs.example.com".to_string()
            ])
        );
        assert_eq!(
            config.transactional_backend,
            Some(TransactionalBackend::Postgres)
        );
    }

    #[test]
    fn test_parse_system_prune() {
        let cli = Cli::try_parse_from(["jobboard", "system", "prune", "-y"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::System {
                command: SystemCommands::Prune { yes: true }
            })
        ));
    }

    #[test]
    fn test_invalid_backend_rejected() {
        assert!(parse_transactional_backend("mysql").is_err());
        assert_eq!(
            parse_transactional_backend("SQLite"),
            Ok(TransactionalBackend::Sqlite)
        );
    }
}
