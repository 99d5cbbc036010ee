mod http;
pub mod justwatch;
mod traits;

pub use http::HttpClient;
pub use justwatch::{
    ContentKind, JW_API_BASE, JW_IMAGE_BASE, JustWatchProvider, JwEpisodeShort, JwMediaResult,
    JwSeasonMetaResult, JwSeasonShort, MediaRef, REF_PREFIX, format_meta, from_external_ref,
    kind_to_media_type, media_type_to_kind, poster_url, to_external_ref,
};
pub use traits::{MetadataProvider, SearchOptions};

use serde::{Deserialize, Serialize};

/// Provider base configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API base URL
    pub api_base: String,
    /// Catalog locale (e.g. `en_US`)
    pub locale: String,
    /// Page size for search requests
    pub page_size: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: JW_API_BASE.to_string(),
            locale: "en_US".to_string(),
            page_size: 40,
            timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    /// Create new configuration
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Set catalog locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set search page size
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
