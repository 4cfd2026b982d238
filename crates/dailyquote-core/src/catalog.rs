//! The quote catalog: an immutable, ordered collection of quotes.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Error, Result};
use crate::models::{Category, CategoryFilter, Quote, QuoteId};

/// Bundled quotes: (id, text, author, category)
const BUNDLED_QUOTES: [(u32, &str, &str, Category); 10] = [
    (
        1,
        "成功不是終點，失敗不是末日，重要的是繼續前進的勇氣。",
        "溫斯頓·邱吉爾",
        Category::Inspiration,
    ),
    (
        2,
        "生活就像騎自行車，要保持平衡，就必須不斷前進。",
        "愛因斯坦",
        Category::Life,
    ),
    (3, "今天是你餘生的第一天。", "無名氏", Category::Inspiration),
    (
        4,
        "夢想不會逃跑，會逃跑的永遠都是自己。",
        "無名氏",
        Category::Dream,
    ),
    (
        5,
        "每一個成功者都有一個開始。勇於開始，才能找到成功的路。",
        "無名氏",
        Category::Success,
    ),
    (6, "學習就像逆水行舟，不進則退。", "中國諺語", Category::Learning),
    (
        7,
        "時間是最公正的裁判，它不會偏袒任何人。",
        "無名氏",
        Category::Time,
    ),
    (8, "相信自己，你比想像中更強大。", "無名氏", Category::Confidence),
    (9, "機會只偏愛有準備的頭腦。", "路易·巴斯德", Category::Opportunity),
    (
        10,
        "今日事今日畢，明日又有明日事。",
        "無名氏",
        Category::Efficiency,
    ),
];

/// Immutable, ordered collection of quotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    quotes: Vec<Quote>,
}

impl Catalog {
    /// Build a catalog from arbitrary records.
    ///
    /// Rejects empty catalogs, duplicate ids, and quotes with blank text.
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        if quotes.is_empty() {
            return Err(Error::InvalidInput(
                "Catalog must contain at least one quote".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(quotes.len());
        for quote in &quotes {
            if !seen.insert(quote.id) {
                return Err(Error::InvalidInput(format!(
                    "Duplicate quote id in catalog: {}",
                    quote.id
                )));
            }
            if quote.text.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "Quote {} has empty text",
                    quote.id
                )));
            }
        }

        Ok(Self { quotes })
    }

    /// The catalog shipped with the application
    #[must_use]
    pub fn bundled() -> Self {
        let quotes = BUNDLED_QUOTES
            .iter()
            .filter_map(|&(id, text, author, category)| {
                QuoteId::new(id).map(|id| Quote::new(id, text, author, category))
            })
            .collect();
        Self { quotes }
    }

    /// All quotes in catalog order
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// First quote in catalog order
    #[must_use]
    pub fn first(&self) -> &Quote {
        &self.quotes[0]
    }

    /// Number of quotes
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false: a catalog holds at least one quote
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Look up a quote by id
    #[must_use]
    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|quote| quote.id == id)
    }

    /// Check whether an id resolves in this catalog
    #[must_use]
    pub fn contains(&self, id: QuoteId) -> bool {
        self.get(id).is_some()
    }

    /// Quotes passing the given filter, in catalog order
    #[must_use]
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|quote| filter.matches(quote.category))
            .collect()
    }

    /// Pick uniformly at random from the whole catalog
    pub fn random_quote<R: Rng>(&self, rng: &mut R) -> &Quote {
        &self.quotes[rng.random_range(0..self.quotes.len())]
    }

    /// Distinct categories in first-appearance order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for quote in &self.quotes {
            if !categories.contains(&quote.category) {
                categories.push(quote.category);
            }
        }
        categories
    }
}

/// Pick uniformly at random among candidates, `None` when there are none
pub fn pick_random<'a, R: Rng>(
    candidates: &[&'a Quote],
    rng: &mut R,
) -> Option<&'a Quote> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}
