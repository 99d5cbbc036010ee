use super::{
    api_types::{ContentKind, JwMediaResult, JwSeasonMetaResult, SearchBody, SearchResponse},
    convert::{format_meta, media_type_to_kind},
    ident::{MediaRef, from_external_ref},
};
use crate::scraper::{
    Result, ScraperError,
    provider::{HttpClient, MetadataProvider, ProviderConfig, SearchOptions},
    types::{MediaMeta, MediaType},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct JustWatchProvider {
    client: HttpClient,
    config: ProviderConfig,
}

impl JustWatchProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = HttpClient::new(
            config.api_base.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch metadata for a `JW-<kind>-<id>` reference
    pub async fn get_metadata_by_ref(
        &self,
        external_ref: &str,
        season_id: Option<&str>,
    ) -> Result<MediaMeta> {
        let media = from_external_ref(external_ref)
            .ok_or_else(|| ScraperError::InvalidRef(external_ref.to_string()))?;

        self.get_metadata(&media, season_id).await
    }

    async fn fetch_title(&self, kind: ContentKind, id: &str) -> Result<JwMediaResult> {
        let endpoint = format!("/content/titles/{kind}/{id}/locale/{}", self.config.locale);
        self.client.get(&endpoint).await
    }

    async fn fetch_season(&self, season_id: &str) -> Result<JwSeasonMetaResult> {
        let endpoint = format!(
            "/content/titles/show_season/{season_id}/locale/{}",
            self.config.locale
        );
        self.client.get(&endpoint).await
    }

    /// Choose which season to load in full: the requested one, or the lowest-numbered
    fn pick_season(media: &JwMediaResult, requested: Option<&str>) -> Result<Option<String>> {
        let seasons = media.seasons.as_deref().unwrap_or_default();

        match requested {
            Some(wanted) => seasons
                .iter()
                .find(|s| s.id.to_string() == wanted)
                .map(|s| Some(s.id.to_string()))
                .ok_or_else(|| {
                    ScraperError::NotFound(format!("season {wanted} of title {}", media.id))
                }),
            None => Ok(seasons
                .iter()
                .min_by_key(|s| s.season_number)
                .map(|s| s.id.to_string())),
        }
    }
}

#[async_trait]
impl MetadataProvider for JustWatchProvider {
    fn id(&self) -> &'static str {
        "justwatch"
    }

    fn name(&self) -> &'static str {
        "JustWatch"
    }

    fn supported_types(&self) -> &[MediaType] {
        &[MediaType::Movie, MediaType::Series]
    }

    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<MediaMeta>> {
        let content_types = match options.media_type {
            Some(media_type) => vec![media_type_to_kind(media_type)?],
            None => vec![ContentKind::Movie, ContentKind::Show],
        };

        let body = SearchBody {
            content_types,
            page: 1,
            page_size: self.config.page_size,
            query,
        };
        let body = serde_json::to_string(&body)
            .map_err(|e| ScraperError::Parse(format!("search body: {e}")))?;

        let endpoint = format!("/content/titles/{}/popular", self.config.locale);
        let response: SearchResponse = self
            .client
            .get_with_params(&endpoint, &[("body", body.as_str())])
            .await?;

        let mut results: Vec<MediaMeta> = response
            .items
            .into_iter()
            .filter_map(|item| {
                let id = item.id;
                match format_meta(item, None) {
                    Ok(meta) => Some(meta),
                    Err(e) => {
                        warn!(id, error = %e, "Skipping search result");
                        None
                    }
                }
            })
            .collect();

        if results.is_empty() {
            return Err(ScraperError::NotFound(format!(
                "No results found for: {query}"
            )));
        }

        if let Some(limit) = options.limit {
            results.truncate(limit);
        }

        info!(provider = self.name(), query, count = results.len(), "Search complete");
        Ok(results)
    }

    async fn get_metadata(&self, media: &MediaRef, season_id: Option<&str>) -> Result<MediaMeta> {
        let kind = media_type_to_kind(media.media_type)?;
        let title = self.fetch_title(kind, &media.id).await?;

        let season = match kind {
            ContentKind::Show => match Self::pick_season(&title, season_id)? {
                Some(id) => {
                    debug!(title = title.id, season = %id, "Fetching season detail");
                    Some(self.fetch_season(&id).await?)
                }
                None => None,
            },
            ContentKind::Movie => {
                if let Some(id) = season_id {
                    warn!(title = title.id, season = id, "Ignoring season for a movie");
                }
                None
            }
        };

        format_meta(title, season)
    }
}
