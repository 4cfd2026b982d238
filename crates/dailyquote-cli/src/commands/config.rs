use std::path::PathBuf;

use dailyquote_core::util::normalize_text_option;
use serde::Serialize;

use crate::cli::ConfigCommands;
use crate::commands::common::{resolve_share_command, resolve_store_path};
use crate::config::{default_config_path, CliConfig};
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct ResolvedConfig {
    pub config_path: Option<String>,
    pub store_path: String,
    pub share_target: String,
}

pub fn run_config(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            store_path,
            share_command,
            clear_share_command,
        } => run_config_init(store_path, share_command, clear_share_command),
        ConfigCommands::Show { json } => run_config_show(json),
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn run_config_init(
    store_path: Option<PathBuf>,
    share_command: Option<String>,
    clear_share_command: bool,
) -> Result<(), CliError> {
    let mut config = CliConfig::load().map_err(CliError::Config)?;
    apply_config_updates(&mut config, store_path, share_command, clear_share_command)?;

    let path = config.save().map_err(CliError::Config)?;
    println!("Config initialized at {}", path.display());
    if config.share_command().is_none() {
        println!("Shared quotes print to stdout. Use --share-command to pipe them elsewhere.");
    }
    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
pub fn apply_config_updates(
    config: &mut CliConfig,
    store_path: Option<PathBuf>,
    share_command: Option<String>,
    clear_share_command: bool,
) -> Result<(), CliError> {
    if let Some(path) = store_path {
        let path = normalize_text_option(Some(path.to_string_lossy().into_owned()))
            .ok_or_else(|| CliError::Config("store_path must not be empty".to_string()))?;
        config.store_path = Some(path);
    }

    if clear_share_command {
        config.share_command = None;
    } else if let Some(command) = share_command {
        let command = normalize_text_option(Some(command))
            .ok_or_else(|| CliError::Config("share_command must not be empty".to_string()))?;
        config.share_command = Some(command);
    }

    Ok(())
}

pub fn resolve_config(config: &CliConfig) -> Result<ResolvedConfig, CliError> {
    Ok(ResolvedConfig {
        config_path: default_config_path()
            .ok()
            .map(|path| path.display().to_string()),
        store_path: resolve_store_path(None, config)?.display().to_string(),
        share_target: resolve_share_command(config).unwrap_or_else(|| "stdout".to_string()),
    })
}

pub fn run_config_show(as_json: bool) -> Result<(), CliError> {
    let config = CliConfig::load().map_err(CliError::Config)?;
    let resolved = resolve_config(&config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!(
            "config:  {}",
            resolved.config_path.as_deref().unwrap_or("(unavailable)")
        );
        println!("store:   {}", resolved.store_path);
        println!("share:   {}", resolved.share_target);
    }

    Ok(())
}
