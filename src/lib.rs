//! Talks Catalog - a bilingual catalog of talks and presentations
//!
//! Loads a JSON collection of talks, filters and searches it, and renders
//! list and detail pages as static HTML in Spanish or English.

pub mod app;
pub mod audit;
pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod markdown;
pub mod migrate;
pub mod preferences;
pub mod render;
pub mod source;
pub mod state;
pub mod summary;
pub mod talk;
pub mod view;

pub use app::Catalog;
pub use i18n::Lang;
pub use talk::Talk;
