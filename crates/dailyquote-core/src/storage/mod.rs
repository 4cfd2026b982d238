//! Key-value persistence for Daily Quote
//!
//! Stores implement [`KeyValueStore`] and report every failure. Callers never
//! use a store directly: they go through [`PersistenceGateway`], which turns
//! failures into "absent" on read and a logged `false` on write. Persistence is
//! best-effort; in-memory state stays the source of truth for the session.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Persisted favorites list (JSON array of quote ids)
pub const FAVORITES_KEY: &str = "favorites";

/// Calendar date of the persisted daily quote marker
pub const DAILY_QUOTE_DATE_KEY: &str = "dailyQuoteDate";

/// Quote id of the persisted daily quote marker
pub const DAILY_QUOTE_ID_KEY: &str = "dailyQuoteId";

/// Trait for string key-value storage (async)
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore> KeyValueStore for &T {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}

/// Best-effort wrapper around a [`KeyValueStore`]
pub struct PersistenceGateway<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    /// Wrap a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read a value; failures are logged and reported as absent
    pub async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "Failed to read persisted value; treating as absent");
                None
            }
        }
    }

    /// Write a value; returns `false` (after logging) when the store fails
    pub async fn write(&self, key: &str, value: &str) -> bool {
        match self.store.set(key, value).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(key, %error, "Failed to persist value; keeping in-memory state");
                false
            }
        }
    }

    /// Access the wrapped store
    pub const fn store(&self) -> &S {
        &self.store
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FlakyStore;
    use super::*;

    #[tokio::test]
    async fn gateway_reads_and_writes_through() {
        let gateway = PersistenceGateway::new(MemoryStore::new());
        assert_eq!(gateway.read(FAVORITES_KEY).await, None);
        assert!(gateway.write(FAVORITES_KEY, "[1]").await);
        assert_eq!(gateway.read(FAVORITES_KEY).await.as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn gateway_treats_read_failure_as_absent() {
        let store = FlakyStore::failing_reads();
        store.inner.set(FAVORITES_KEY, "[2]").await.unwrap();

        let gateway = PersistenceGateway::new(store);
        assert_eq!(gateway.read(FAVORITES_KEY).await, None);
    }

    #[tokio::test]
    async fn gateway_reports_write_failure_without_error() {
        let gateway = PersistenceGateway::new(FlakyStore::failing_writes());
        assert!(!gateway.write(DAILY_QUOTE_ID_KEY, "4").await);
        assert_eq!(gateway.store().inner.get(DAILY_QUOTE_ID_KEY).await.unwrap(), None);
    }
}
