mod provider;
mod types;


pub use provider::{
    ContentKind, HttpClient, JW_API_BASE, JW_IMAGE_BASE, JustWatchProvider, JwEpisodeShort,
    JwMediaResult, JwSeasonMetaResult, JwSeasonShort, MediaRef, MetadataProvider, ProviderConfig,
    REF_PREFIX, SearchOptions, format_meta, from_external_ref, kind_to_media_type,
    media_type_to_kind, poster_url, to_external_ref,
};
pub use types::{EpisodeMeta, MediaDetails, MediaMeta, MediaType, SeasonData, SeasonMeta};

/// Scraper result type
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Scraper error types
#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid external ref: {0}")]
    InvalidRef(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
