//! Data models for Daily Quote

mod category;
mod quote;

pub use category::{Category, CategoryFilter, UnknownCategory, ALL_LABEL, ALL_SLUG};
pub use quote::{Quote, QuoteId};
