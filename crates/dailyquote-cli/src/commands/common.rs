use std::env;
use std::path::PathBuf;

use dailyquote_core::daily::SystemClock;
use dailyquote_core::storage::{KeyValueStore, MemoryStore, SqliteStore};
use dailyquote_core::util::normalize_text_option;
use dailyquote_core::{Catalog, CategoryFilter, Quote, QuoteController, QuoteId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::share::ShareBackend;

/// Controller type every command drives
pub type Session = QuoteController<AppStore>;

/// Where session state is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Ephemeral,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub store: StoreLocation,
    pub seed: Option<u64>,
}

/// Store backing a CLI session
pub enum AppStore {
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl KeyValueStore for AppStore {
    async fn get(&self, key: &str) -> dailyquote_core::Result<Option<String>> {
        match self {
            Self::Sqlite(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> dailyquote_core::Result<()> {
        match self {
            Self::Sqlite(store) => store.set(key, value).await,
            Self::Memory(store) => store.set(key, value).await,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteItem {
    pub id: u32,
    pub text: String,
    pub author: String,
    pub category: String,
    pub category_slug: String,
    pub favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub label: String,
    pub slug: String,
    pub quotes: usize,
}

pub fn quote_to_item(quote: &Quote, favorite: bool) -> QuoteItem {
    QuoteItem {
        id: quote.id.get(),
        text: quote.text.clone(),
        author: quote.author.clone(),
        category: quote.category.label().to_string(),
        category_slug: quote.category.slug().to_string(),
        favorite,
    }
}

pub fn session_quote_items(session: &Session, quotes: &[&Quote]) -> Vec<QuoteItem> {
    quotes
        .iter()
        .map(|quote| quote_to_item(quote, session.favorites().is_favorite(quote.id)))
        .collect()
}

/// Open the store, build the controller, and run its startup sequence
pub async fn open_session(options: &SessionOptions) -> Result<Session, CliError> {
    let store = open_store(&options.store)?;
    let mut session = match options.seed {
        Some(seed) => QuoteController::new(
            Catalog::bundled(),
            store,
            SystemClock,
            StdRng::seed_from_u64(seed),
        ),
        None => QuoteController::with_store(store),
    };
    session.start().await;
    Ok(session)
}

pub fn open_store(location: &StoreLocation) -> Result<AppStore, CliError> {
    match location {
        StoreLocation::Ephemeral => Ok(AppStore::Memory(MemoryStore::new())),
        StoreLocation::File(path) => Ok(AppStore::Sqlite(SqliteStore::open(path)?)),
    }
}

pub fn parse_category(value: Option<&str>) -> Result<CategoryFilter, CliError> {
    let Some(value) = value else {
        return Ok(CategoryFilter::All);
    };
    value
        .parse::<CategoryFilter>()
        .map_err(|error| CliError::UnknownCategory(error.0))
}

pub fn parse_quote_id(value: &str) -> Result<QuoteId, CliError> {
    let trimmed = value.trim();
    trimmed
        .parse::<QuoteId>()
        .map_err(|_| CliError::QuoteNotFound(trimmed.to_string()))
}

/// Make the quote addressed by `id` current; today's quote stays current when
/// no id is given
pub fn focus_optional_quote(session: &mut Session, id: Option<&str>) -> Result<(), CliError> {
    let Some(raw) = id else {
        return Ok(());
    };
    let quote_id = parse_quote_id(raw)?;
    session
        .focus_quote(quote_id)
        .map_err(|_| CliError::QuoteNotFound(quote_id.to_string()))?;
    Ok(())
}

pub fn resolve_store_location(
    cli_store_path: Option<PathBuf>,
    ephemeral: bool,
    config: &CliConfig,
) -> Result<StoreLocation, CliError> {
    if ephemeral {
        return Ok(StoreLocation::Ephemeral);
    }
    resolve_store_path(cli_store_path, config).map(StoreLocation::File)
}

pub fn resolve_store_path(
    cli_store_path: Option<PathBuf>,
    config: &CliConfig,
) -> Result<PathBuf, CliError> {
    if let Some(path) = cli_store_path
        .or_else(|| env::var_os("DAILYQUOTE_STORE_PATH").map(PathBuf::from))
        .or_else(|| config.store_path())
    {
        return Ok(path);
    }
    default_store_path()
}

pub fn default_store_path() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|dir| dir.join("dailyquote").join("dailyquote.db"))
        .ok_or_else(|| CliError::Config("Failed to resolve CLI data directory".to_string()))
}

pub fn resolve_share_command(config: &CliConfig) -> Option<String> {
    normalize_text_option(env::var("DAILYQUOTE_SHARE_COMMAND").ok())
        .or_else(|| config.share_command())
}

pub fn share_backend(config: &CliConfig) -> ShareBackend {
    ShareBackend::from_command(resolve_share_command(config))
}
