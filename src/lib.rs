//! Provider-agnostic media metadata from the JustWatch catalog.

pub mod scraper;
pub mod settings;

pub use scraper::{MediaMeta, MediaRef, MediaType, Result, ScraperError};
pub use settings::Settings;
