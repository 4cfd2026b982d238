//! Quote model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::Category;

/// A unique identifier for a quote within its catalog (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(NonZeroU32);

impl QuoteId {
    /// Create an ID from a raw value, rejecting zero
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Get the raw numeric value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A quotation in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier
    pub id: QuoteId,
    /// Quotation text
    pub text: String,
    /// Attributed author (無名氏 when unknown)
    pub author: String,
    /// Category tag
    pub category: Category,
}

impl Quote {
    /// Create a new quote record
    #[must_use]
    pub fn new(
        id: QuoteId,
        text: impl Into<String>,
        author: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.into(),
            category,
        }
    }

    /// Text used when sharing: the quote, a blank line, then the attribution
    #[must_use]
    pub fn share_message(&self) -> String {
        format!("{}\n\n— {}", self.text, self.author)
    }
}
