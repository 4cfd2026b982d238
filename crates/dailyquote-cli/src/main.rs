//! Daily Quote CLI - one quote a day from the terminal
//!
//! Shows today's quote, picks random ones, and keeps favorites between runs.

mod cli;
mod commands;
mod config;
mod error;
mod render;
mod share;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::categories::run_categories;
use crate::commands::common::{resolve_store_location, share_backend, SessionOptions};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::favorite::run_favorite;
use crate::commands::favorites::run_favorites;
use crate::commands::interactive::run_interactive;
use crate::commands::list::run_list;
use crate::commands::random::run_random;
use crate::commands::share::run_share;
use crate::commands::stats::run_stats;
use crate::commands::today::run_today;
use crate::config::CliConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command = match cli.command {
        Some(Commands::Completions { shell, output }) => {
            return run_completions(shell, output.as_deref());
        }
        Some(Commands::Config { command }) => return run_config(command),
        Some(Commands::Categories { json }) => return run_categories(json),
        command => command,
    };

    let config = CliConfig::load().map_err(CliError::Config)?;
    let options = SessionOptions {
        store: resolve_store_location(cli.store_path, cli.ephemeral, &config)?,
        seed: cli.seed,
    };

    match command {
        Some(Commands::Today { json }) => run_today(json, &options).await?,
        None => run_today(false, &options).await?,
        Some(Commands::Random { category, json }) => {
            run_random(category.as_deref(), json, &options).await?;
        }
        Some(Commands::Favorite { id }) => run_favorite(id.as_deref(), &options).await?,
        Some(Commands::Favorites { json }) => run_favorites(json, &options).await?,
        Some(Commands::Share { id }) => {
            run_share(id.as_deref(), &share_backend(&config), &options).await?;
        }
        Some(Commands::List { category, json }) => {
            run_list(category.as_deref(), json, &options).await?;
        }
        Some(Commands::Stats { json }) => run_stats(json, &options).await?,
        Some(Commands::Interactive) => {
            run_interactive(&share_backend(&config), &options).await?;
        }
        Some(
            Commands::Completions { .. } | Commands::Config { .. } | Commands::Categories { .. },
        ) => {}
    }

    Ok(())
}
