//! Daily quote selection.
//!
//! Once per launch the selector decides which quote is "today's quote". A
//! persisted marker (date + quote id) keeps the choice stable for the rest of
//! the calendar day; a new day, a missing marker, or a marker whose id no
//! longer resolves all lead to a fresh uniform pick from the whole catalog.

use chrono::NaiveDate;
use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{Quote, QuoteId};
use crate::storage::{
    KeyValueStore, PersistenceGateway, DAILY_QUOTE_DATE_KEY, DAILY_QUOTE_ID_KEY,
};

/// Day-granularity format of the persisted date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current calendar date
pub trait Clock {
    /// Today's date, no time component
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Render a date the way it is persisted
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Persisted binding of a calendar date to the quote chosen for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyQuoteMarker {
    /// Calendar date as persisted (`YYYY-MM-DD`)
    pub date: String,
    /// Quote selected for that date
    pub quote_id: QuoteId,
}

impl DailyQuoteMarker {
    /// Read the marker; `None` if either half is absent or the id is malformed
    pub async fn load<S: KeyValueStore>(gateway: &PersistenceGateway<S>) -> Option<Self> {
        let date = gateway.read(DAILY_QUOTE_DATE_KEY).await?;
        let raw_id = gateway.read(DAILY_QUOTE_ID_KEY).await?;

        match raw_id.parse::<QuoteId>() {
            Ok(quote_id) => Some(Self { date, quote_id }),
            Err(error) => {
                tracing::debug!(raw_id = %raw_id, %error, "Ignoring malformed daily quote id");
                None
            }
        }
    }

    /// Persist the marker with two writes (date, then id).
    ///
    /// Returns `true` only if both writes succeeded.
    pub async fn store<S: KeyValueStore>(&self, gateway: &PersistenceGateway<S>) -> bool {
        let date_written = gateway.write(DAILY_QUOTE_DATE_KEY, &self.date).await;
        let id_written = gateway
            .write(DAILY_QUOTE_ID_KEY, &self.quote_id.to_string())
            .await;
        date_written && id_written
    }
}

/// Decides and remembers the quote of the day
#[derive(Debug, Clone, Default)]
pub struct DailyQuoteSelector<C> {
    clock: C,
}

impl<C: Clock> DailyQuoteSelector<C> {
    /// Create a selector reading dates from `clock`
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Today's date in persisted form
    pub fn today(&self) -> String {
        format_day(self.clock.today())
    }

    /// Establish today's quote.
    ///
    /// Reuses the persisted marker when it is for today and its id resolves;
    /// otherwise picks from the whole catalog and persists a new marker
    /// (best-effort). Never fails.
    pub async fn establish<'c, S, R>(
        &self,
        catalog: &'c Catalog,
        gateway: &PersistenceGateway<S>,
        rng: &mut R,
    ) -> &'c Quote
    where
        S: KeyValueStore,
        R: Rng,
    {
        let today = self.today();

        if let Some(marker) = DailyQuoteMarker::load(gateway).await {
            if marker.date == today {
                if let Some(quote) = catalog.get(marker.quote_id) {
                    tracing::debug!(quote_id = %quote.id, "Reusing today's quote");
                    return quote;
                }
                tracing::debug!(
                    quote_id = %marker.quote_id,
                    "Persisted daily quote no longer in catalog; picking a new one"
                );
            }
        }

        let quote = catalog.random_quote(rng);
        let marker = DailyQuoteMarker {
            date: today,
            quote_id: quote.id,
        };
        if !marker.store(gateway).await {
            tracing::warn!(quote_id = %quote.id, "Daily quote marker not fully persisted");
        }
        tracing::debug!(quote_id = %quote.id, date = %marker.date, "Selected new daily quote");
        quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::FlakyStore;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn stored(gateway: &PersistenceGateway<MemoryStore>, key: &str) -> Option<String> {
        gateway.store().get(key).await.unwrap()
    }

    #[test]
    fn test_format_day_has_no_time_component() {
        assert_eq!(format_day(day(2026, 1, 5)), "2026-01-05");
    }

    #[tokio::test]
    async fn test_same_day_returns_same_quote() {
        let catalog = Catalog::bundled();
        let gateway = PersistenceGateway::new(MemoryStore::new());
        let selector = DailyQuoteSelector::new(FixedClock(day(2026, 10, 18)));

        let first = selector
            .establish(&catalog, &gateway, &mut StdRng::seed_from_u64(1))
            .await
            .id;
        for seed in 2..20 {
            let again = selector
                .establish(&catalog, &gateway, &mut StdRng::seed_from_u64(seed))
                .await;
            assert_eq!(again.id, first);
        }
    }

    #[tokio::test]
    async fn test_new_day_persists_marker_for_that_day() {
        let catalog = Catalog::bundled();
        let gateway = PersistenceGateway::new(MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(3);

        let monday = DailyQuoteSelector::new(FixedClock(day(2026, 10, 19)));
        let quote = monday.establish(&catalog, &gateway, &mut rng).await;
        assert_eq!(
            stored(&gateway, DAILY_QUOTE_DATE_KEY).await.as_deref(),
            Some("2026-10-19")
        );
        assert_eq!(
            stored(&gateway, DAILY_QUOTE_ID_KEY).await,
            Some(quote.id.to_string())
        );

        let tuesday = DailyQuoteSelector::new(FixedClock(day(2026, 10, 20)));
        let quote = tuesday.establish(&catalog, &gateway, &mut rng).await;
        assert_eq!(
            stored(&gateway, DAILY_QUOTE_DATE_KEY).await.as_deref(),
            Some("2026-10-20")
        );
        assert_eq!(
            stored(&gateway, DAILY_QUOTE_ID_KEY).await,
            Some(quote.id.to_string())
        );
    }

    #[tokio::test]
    async fn test_reuses_valid_marker_for_today() {
        let catalog = Catalog::bundled();
        let gateway = PersistenceGateway::new(MemoryStore::with_entries([
            (DAILY_QUOTE_DATE_KEY, "2026-10-18"),
            (DAILY_QUOTE_ID_KEY, "6"),
        ]));
        let selector = DailyQuoteSelector::new(FixedClock(day(2026, 10, 18)));

        let quote = selector
            .establish(&catalog, &gateway, &mut StdRng::seed_from_u64(0))
            .await;
        assert_eq!(quote.id.get(), 6);
    }

    #[tokio::test]
    async fn test_unresolvable_marker_id_triggers_fresh_pick() {
        let catalog = Catalog::bundled();
        let gateway = PersistenceGateway::new(MemoryStore::with_entries([
            (DAILY_QUOTE_DATE_KEY, "2026-10-18"),
            (DAILY_QUOTE_ID_KEY, "999"),
        ]));
        let selector = DailyQuoteSelector::new(FixedClock(day(2026, 10, 18)));

        let quote = selector
            .establish(&catalog, &gateway, &mut StdRng::seed_from_u64(0))
            .await;
        assert!(catalog.contains(quote.id));
        assert_eq!(
            stored(&gateway, DAILY_QUOTE_ID_KEY).await,
            Some(quote.id.to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_marker_id_triggers_fresh_pick() {
        let catalog = Catalog::bundled();
        let gateway = PersistenceGateway::new(MemoryStore::with_entries([
            (DAILY_QUOTE_DATE_KEY, "2026-10-18"),
            (DAILY_QUOTE_ID_KEY, "not-a-number"),
        ]));
        let selector = DailyQuoteSelector::new(FixedClock(day(2026, 10, 18)));

        let quote = selector
            .establish(&catalog, &gateway, &mut StdRng::seed_from_u64(0))
            .await;
        assert_eq!(
            stored(&gateway, DAILY_QUOTE_ID_KEY).await,
            Some(quote.id.to_string())
        );
    }

    #[tokio::test]
    async fn test_write_failure_keeps_selection() {
        let catalog = Catalog::bundled();
        let gateway = PersistenceGateway::new(FlakyStore::failing_writes());
        let selector = DailyQuoteSelector::new(FixedClock(day(2026, 10, 18)));

        let quote = selector
            .establish(&catalog, &gateway, &mut StdRng::seed_from_u64(11))
            .await;
        assert!(catalog.contains(quote.id));
        assert_eq!(DailyQuoteMarker::load(&gateway).await, None);
    }

    #[tokio::test]
    async fn test_read_failure_is_treated_as_no_marker() {
        let catalog = Catalog::bundled();
        let gateway = PersistenceGateway::new(FlakyStore::failing_reads());
        let selector = DailyQuoteSelector::new(FixedClock(day(2026, 10, 18)));

        let quote = selector
            .establish(&catalog, &gateway, &mut StdRng::seed_from_u64(5))
            .await;
        assert!(catalog.contains(quote.id));
        assert_eq!(
            gateway.store().inner.get(DAILY_QUOTE_DATE_KEY).await.unwrap().as_deref(),
            Some("2026-10-18")
        );
    }
}
