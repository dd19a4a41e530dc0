//! Marketcart - persistent shopping cart
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use marketcart::cli::{Cli, Commands};
use marketcart::config::ConfigManager;
use marketcart::error::CartResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CartResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let mut config = config_manager.load().await?;

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("marketcart=warn"),
        1 => EnvFilter::new("marketcart=info"),
        _ => EnvFilter::new("marketcart=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if config.general.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.without_time().init();
    }

    debug!("Using config {}", config_manager.path().display());

    if let Some(path) = cli.store {
        debug!("Storage path overridden: {}", path.display());
        config.storage.path = Some(path);
    }

    match cli.command {
        Commands::Add(args) => marketcart::cli::commands::add(args, &config).await,
        Commands::Increment(args) => marketcart::cli::commands::increment(args, &config).await,
        Commands::Decrement(args) => marketcart::cli::commands::decrement(args, &config).await,
        Commands::List(args) => marketcart::cli::commands::list(args, &config).await,
        Commands::Config(args) => {
            marketcart::cli::commands::config(args, &config, &config_manager).await
        }
    }
}
