use super::justwatch::MediaRef;
use crate::scraper::{
    Result,
    types::{MediaMeta, MediaType},
};
use async_trait::async_trait;

/// Search options for providers
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Limit results
    pub limit: Option<usize>,
    /// Media type filter
    pub media_type: Option<MediaType>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }
}

/// Core trait for metadata providers
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Provider identifier (e.g., "justwatch")
    fn id(&self) -> &'static str;

    /// Human-readable provider name
    fn name(&self) -> &'static str;

    /// Media types this provider supports
    fn supported_types(&self) -> &[MediaType];

    /// Whether this provider can serve the given media type
    fn supports(&self, media_type: MediaType) -> bool {
        self.supported_types().contains(&media_type)
    }

    /// Search for media
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<MediaMeta>>;

    /// Get metadata for a title, optionally with one season's full detail
    async fn get_metadata(&self, media: &MediaRef, season_id: Option<&str>) -> Result<MediaMeta>;
}
