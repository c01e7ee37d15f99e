use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use commands::{cmd_config, cmd_convert, cmd_panel};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // stdout carries panel output only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = Config::resolve_path(cli.config.as_deref());
    tracing::debug!("Using config file: {}", config_path.display());

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            format,
        } => cmd_convert(value, from, to, format)?,
        Commands::Panel { no_save } => cmd_panel(&config_path, no_save).await?,
        Commands::Config { action } => cmd_config(action, &config_path, cli.quiet)?,
    }

    Ok(())
}
