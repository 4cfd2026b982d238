//! Favorites management
//!
//! The in-memory set is the source of truth for the session; every toggle
//! persists the whole set as a JSON array, best-effort.

use crate::catalog::Catalog;
use crate::models::QuoteId;
use crate::storage::{KeyValueStore, PersistenceGateway, FAVORITES_KEY};

/// Insertion-ordered set of favorited quote ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesManager {
    ids: Vec<QuoteId>,
}

impl FavoritesManager {
    /// Create an empty manager
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Load the persisted favorites.
    ///
    /// Absent, unreadable, or malformed data yields an empty set. Duplicates
    /// collapse and ids missing from the catalog are dropped.
    pub async fn hydrate<S: KeyValueStore>(
        &mut self,
        gateway: &PersistenceGateway<S>,
        catalog: &Catalog,
    ) {
        self.ids.clear();

        let Some(raw) = gateway.read(FAVORITES_KEY).await else {
            return;
        };

        let parsed = match serde_json::from_str::<Vec<QuoteId>>(&raw) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::debug!(%error, "Ignoring malformed favorites data");
                return;
            }
        };

        for id in parsed {
            if !catalog.contains(id) {
                tracing::debug!(quote_id = %id, "Dropping favorite missing from catalog");
                continue;
            }
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Flip membership of `id`, persist the result, and return the new
    /// membership
    pub async fn toggle<S: KeyValueStore>(
        &mut self,
        id: QuoteId,
        gateway: &PersistenceGateway<S>,
    ) -> bool {
        let is_member = if let Some(position) = self.ids.iter().position(|&fav| fav == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id);
            true
        };

        self.persist(gateway).await;
        is_member
    }

    /// Pure membership query
    pub fn is_favorite(&self, id: QuoteId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorited ids in the order they were added
    pub fn ids(&self) -> &[QuoteId] {
        &self.ids
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether there are no favorites
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    async fn persist<S: KeyValueStore>(&self, gateway: &PersistenceGateway<S>) {
        match serde_json::to_string(&self.ids) {
            Ok(serialized) => {
                gateway.write(FAVORITES_KEY, &serialized).await;
            }
            Err(error) => tracing::warn!(%error, "Failed to serialize favorites"),
        }
    }
}
