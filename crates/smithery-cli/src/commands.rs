//! Main commands enum.

use clap::Subcommand;

/// Available commands for the Smithery MCP agent.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the search, install, use and list walkthrough
    Demo,

    /// Read queries from the terminal and run them through the agent
    Interactive,

    /// List the available tools and load configuration (no API key needed)
    Mock,

    /// Search the Smithery registry for MCP servers
    Search {
        /// Search terms, e.g. "web search"
        #[arg(required = true)]
        query: Vec<String>,
        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Install an MCP server with the Smithery CLI
    Install {
        /// Server to install (e.g. "exa" or "@org/server-name")
        server_name: String,
        /// Target client (defaults to the configured client)
        #[arg(long)]
        client: Option<String>,
        /// Configuration file passed through to the Smithery CLI
        #[arg(long = "config-file")]
        config_file: Option<String>,
    },

    /// Inspect an MCP server's tools
    Inspect {
        /// Server to inspect
        server_name: String,
    },
}
