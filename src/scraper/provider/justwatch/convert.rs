use super::{
    JW_IMAGE_BASE,
    api_types::{ContentKind, JwMediaResult, JwSeasonMetaResult},
};
use crate::scraper::{
    Result, ScraperError,
    types::{EpisodeMeta, MediaDetails, MediaMeta, MediaType, SeasonData, SeasonMeta},
};

const PROFILE_PLACEHOLDER: &str = "{profile}";
const POSTER_PROFILE: &str = "s166";

impl From<ContentKind> for MediaType {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Movie => Self::Movie,
            ContentKind::Show => Self::Series,
        }
    }
}

impl TryFrom<MediaType> for ContentKind {
    type Error = ScraperError;

    fn try_from(media_type: MediaType) -> Result<Self> {
        match media_type {
            MediaType::Movie => Ok(Self::Movie),
            MediaType::Series => Ok(Self::Show),
            other => Err(ScraperError::UnsupportedType(other.to_string())),
        }
    }
}

/// Map a JustWatch `object_type` tag to the internal media type
pub fn kind_to_media_type(kind: &str) -> Result<MediaType> {
    kind.parse::<ContentKind>().map(MediaType::from)
}

/// Map an internal media type to its JustWatch content kind
pub fn media_type_to_kind(media_type: MediaType) -> Result<ContentKind> {
    ContentKind::try_from(media_type)
}

/// Resolve a poster path template to a full image URL
#[must_use]
pub fn poster_url(path: &str) -> String {
    format!(
        "{JW_IMAGE_BASE}{}",
        path.replacen(PROFILE_PLACEHOLDER, POSTER_PROFILE, 1)
    )
}

/// Convert a JustWatch title, and optionally one of its seasons, into [`MediaMeta`].
///
/// Season summaries and episodes are sorted here; the API does not guarantee
/// any order. Season data sent for a movie is dropped.
pub fn format_meta(media: JwMediaResult, season: Option<JwSeasonMetaResult>) -> Result<MediaMeta> {
    let kind: ContentKind = media.object_type.parse()?;

    let details = match kind {
        ContentKind::Show => MediaDetails::Series {
            seasons: media.seasons.map(|mut seasons| {
                seasons.sort_by_key(|s| s.season_number);
                seasons
                    .into_iter()
                    .map(|s| SeasonMeta {
                        id: s.id.to_string(),
                        number: s.season_number,
                        title: s.title,
                    })
                    .collect()
            }),
            season_data: season.map(format_season),
        },
        ContentKind::Movie => MediaDetails::Movie,
    };

    Ok(MediaMeta {
        id: media.id.to_string(),
        title: media.title,
        year: media.original_release_year.to_string(),
        poster: media
            .poster
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(poster_url),
        details,
    })
}

fn format_season(mut season: JwSeasonMetaResult) -> SeasonData {
    season.episodes.sort_by_key(|e| e.episode_number);

    SeasonData {
        id: season.id,
        number: season.season_number,
        title: season.title,
        episodes: season
            .episodes
            .into_iter()
            .map(|e| EpisodeMeta {
                id: e.id.to_string(),
                number: e.episode_number,
                title: e.title,
            })
            .collect(),
    }
}
