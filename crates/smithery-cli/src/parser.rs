//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::bootstrap::DEFAULT_CONFIG_PATH;
use crate::commands::Commands;

/// Command-line interface for the Smithery MCP agent.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "smithery-agent")]
#[command(about = "Discover, install and use MCP servers via the Smithery CLI")]
#[command(version)]
pub struct Cli {
    /// Path to the agent configuration file
    #[arg(long = "config", global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// API key for the model
    #[arg(long = "api-key", env = "GOOGLE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name (overrides the configuration file)
    #[arg(long = "model", global = true)]
    pub model: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Without a subcommand the basic checks run (mock checks if no API key)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "smithery-agent",
            "--verbose",
            "--config",
            "/tmp/agent.yaml",
            "--model",
            "gemini-2.0-flash",
            "mock",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("/tmp/agent.yaml"));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert!(matches!(cli.command, Some(Commands::Mock)));
    }

    #[test]
    fn test_subcommand_is_optional() {
        let cli = Cli::parse_from(["smithery-agent", "--api-key", "k"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_install_subcommand() {
        let cli = Cli::parse_from([
            "smithery-agent",
            "install",
            "exa",
            "--client",
            "cursor",
            "--config-file",
            "exa.json",
        ]);
        match cli.command {
            Some(Commands::Install {
                server_name,
                client,
                config_file,
            }) => {
                assert_eq!(server_name, "exa");
                assert_eq!(client.as_deref(), Some("cursor"));
                assert_eq!(config_file.as_deref(), Some("exa.json"));
            }
            _ => panic!("expected install command"),
        }
    }

    #[test]
    fn test_search_default_limit() {
        let cli = Cli::parse_from(["smithery-agent", "search", "web", "search"]);
        match cli.command {
            Some(Commands::Search { query, limit }) => {
                assert_eq!(query, vec!["web", "search"]);
                assert_eq!(limit, 10);
            }
            _ => panic!("expected search command"),
        }
    }
}
