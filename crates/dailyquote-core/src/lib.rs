//! dailyquote-core - Core library for Daily Quote
//!
//! This crate contains the quote catalog, the key-value persistence gateway,
//! daily quote selection, favorites management, and the presentation
//! controller shared by every Daily Quote interface.

pub mod catalog;
pub mod controller;
pub mod daily;
pub mod error;
pub mod favorites;
pub mod models;
pub mod share;
pub mod storage;
pub mod util;

pub use catalog::Catalog;
pub use controller::{Notice, QuoteController, Stats};
pub use error::{Error, Result};
pub use models::{Category, CategoryFilter, Quote, QuoteId};
