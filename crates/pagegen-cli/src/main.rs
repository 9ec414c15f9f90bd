//! pagegen CLI - competitor-informed product page generation
//!
//! This is the main entry point for the pagegen command-line interface.
//! Command implementations live in the `commands` module; the core
//! pipeline lives in `pagegen-core`.

use anyhow::Result;
use clap::Parser;
use pagegen_core::Config;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::initialize_logging(&cli)?;

    let config = load_config(&cli)?;

    execute_command(cli, &config).await
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

async fn execute_command(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => {
            commands::generate_page(&args, config, cli.quiet).await?;
        },

        Commands::Fetch { urls } => {
            commands::preview_fetch(&urls, config).await?;
        },
    }

    Ok(())
}
