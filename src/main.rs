mod cli;
mod commands;
mod mcp;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries command output and the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.parse_options();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server(options).await?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
        Commands::Extract {
            path,
            pages,
            output,
        } => {
            commands::extract::run(&path, &pages, &output, &options)?;
        }
        Commands::Check {
            pages,
            total,
            single,
        } => {
            if single {
                commands::check::run_single(&pages, total)?;
            } else {
                commands::check::run(&pages, total, &options)?;
            }
        }
    }

    Ok(())
}
