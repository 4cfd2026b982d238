use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] dailyquote_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Quote not found for id: {0}")]
    QuoteNotFound(String),
    #[error("Unknown category '{0}'. Run `dailyquote categories` to see the options.")]
    UnknownCategory(String),
}
