pub mod categories;
pub mod common;
pub mod completions;
pub mod config;
pub mod favorite;
pub mod favorites;
pub mod interactive;
pub mod list;
pub mod random;
pub mod share;
pub mod stats;
pub mod today;
