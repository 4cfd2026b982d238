//! Presentation controller: the owned state behind the single quote screen.
//!
//! Holds the current quote, the category filter, and (through the favorites
//! manager) the favorites set. Every user action is one method call; none of
//! them fail, persistence problems only degrade to in-memory behavior.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::catalog::{pick_random, Catalog};
use crate::daily::{Clock, DailyQuoteSelector, SystemClock};
use crate::error::{Error, Result};
use crate::favorites::FavoritesManager;
use crate::models::{CategoryFilter, Quote, QuoteId};
use crate::share::{ShareRequest, ShareTarget};
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Fade-out half of the quote change transition
pub const FADE_OUT: Duration = Duration::from_millis(150);

/// Fade-in half of the quote change transition
pub const FADE_IN: Duration = Duration::from_millis(150);

/// User-visible acknowledgment of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    FavoriteAdded,
    FavoriteRemoved,
    Shared,
    ShareUnavailable,
    ShareFailed,
}

impl Notice {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ShareFailed => "錯誤",
            _ => "提示",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::FavoriteAdded => "已加入收藏",
            Self::FavoriteRemoved => "已從收藏中移除",
            Self::Shared => "已分享",
            Self::ShareUnavailable => "此裝置不支援分享功能",
            Self::ShareFailed => "分享失敗，請稍後再試",
        }
    }

    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::ShareFailed)
    }
}

/// Counters shown under the quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_quotes: usize,
    pub favorites: usize,
}

/// State and actions of the quote screen
pub struct QuoteController<S, C = SystemClock, R = StdRng> {
    catalog: Catalog,
    gateway: PersistenceGateway<S>,
    selector: DailyQuoteSelector<C>,
    favorites: FavoritesManager,
    rng: R,
    current: Quote,
    category: CategoryFilter,
    started: bool,
}

impl<S: KeyValueStore> QuoteController<S> {
    /// Controller over the bundled catalog, the local calendar, and an
    /// OS-seeded random source
    pub fn with_store(store: S) -> Self {
        Self::new(
            Catalog::bundled(),
            store,
            SystemClock,
            StdRng::from_os_rng(),
        )
    }
}

impl<S: KeyValueStore, C: Clock, R: Rng> QuoteController<S, C, R> {
    /// Create a controller showing the catalog's first quote until started
    pub fn new(catalog: Catalog, store: S, clock: C, rng: R) -> Self {
        let current = catalog.first().clone();
        Self {
            catalog,
            gateway: PersistenceGateway::new(store),
            selector: DailyQuoteSelector::new(clock),
            favorites: FavoritesManager::new(),
            rng,
            current,
            category: CategoryFilter::All,
            started: false,
        }
    }

    /// Hydrate favorites, then establish the daily quote. Later calls are
    /// no-ops.
    pub async fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        self.favorites.hydrate(&self.gateway, &self.catalog).await;
        let daily = self
            .selector
            .establish(&self.catalog, &self.gateway, &mut self.rng)
            .await;
        self.current = daily.clone();
        tracing::debug!(
            quote_id = %self.current.id,
            favorites = self.favorites.len(),
            "Quote screen ready"
        );
    }

    /// Pick a random quote from the selected category and make it current.
    ///
    /// A category with no quotes falls back to the whole catalog.
    pub fn select_random_quote(&mut self) -> &Quote {
        let candidates = self.catalog.filtered(self.category);
        let picked = pick_random(&candidates, &mut self.rng).unwrap_or_else(|| {
            tracing::debug!(
                category = %self.category,
                "No quotes in category; picking from the whole catalog"
            );
            self.catalog.random_quote(&mut self.rng)
        });
        self.current = picked.clone();
        &self.current
    }

    /// Replace the category filter without changing the current quote
    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.category = filter;
    }

    /// Make a specific catalog quote current
    pub fn focus_quote(&mut self, id: QuoteId) -> Result<&Quote> {
        let quote = self
            .catalog
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        self.current = quote.clone();
        Ok(&self.current)
    }

    /// Toggle the current quote's favorite status
    pub async fn toggle_current_favorite(&mut self) -> Notice {
        let now_favorite = self.favorites.toggle(self.current.id, &self.gateway).await;
        if now_favorite {
            Notice::FavoriteAdded
        } else {
            Notice::FavoriteRemoved
        }
    }

    /// Share the current quote through `target`
    pub async fn share_current_quote<T: ShareTarget>(&self, target: &T) -> Notice {
        if !target.is_available().await {
            return Notice::ShareUnavailable;
        }

        let request = ShareRequest::for_quote(&self.current);
        match target.share(&request).await {
            Ok(()) => Notice::Shared,
            Err(error) => {
                tracing::warn!(quote_id = %self.current.id, %error, "Share failed");
                Notice::ShareFailed
            }
        }
    }

    pub const fn current_quote(&self) -> &Quote {
        &self.current
    }

    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    pub const fn favorites(&self) -> &FavoritesManager {
        &self.favorites
    }

    pub fn is_current_favorite(&self) -> bool {
        self.favorites.is_favorite(self.current.id)
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Favorited quotes in the order they were added
    pub fn favorite_quotes(&self) -> Vec<&Quote> {
        self.favorites
            .ids()
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total_quotes: self.catalog.len(),
            favorites: self.favorites.len(),
        }
    }

    pub const fn store(&self) -> &S {
        self.gateway.store()
    }
}
