//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs the tracing subscriber and
//! dispatches to the command handlers. Logs go to stderr; command output goes
//! to stdout.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smithery_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = bootstrap(CliConfig {
        config_path: cli.config,
        api_key: cli.api_key,
        model: cli.model,
    })?;

    let Some(command) = cli.command else {
        handlers::check::execute(&ctx).await?;
        return Ok(());
    };

    match command {
        Commands::Demo => handlers::demo::execute(&ctx).await,
        Commands::Interactive => handlers::interactive::execute(&ctx).await,
        Commands::Mock => handlers::mock::execute(&ctx),
        Commands::Search { query, limit } => handlers::tools::search(&query, limit),
        Commands::Install {
            server_name,
            client,
            config_file,
        } => {
            handlers::tools::install(
                &ctx,
                &server_name,
                client.as_deref(),
                config_file.as_deref(),
            )
            .await
        }
        Commands::Inspect { server_name } => handlers::tools::inspect(&ctx, &server_name).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so GOOGLE_API_KEY can come from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    std::io::Write::flush(&mut std::io::stdout()).context("Failed to flush stdout")?;
    Ok(())
}
