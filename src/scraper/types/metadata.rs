use super::MediaType;
use serde::{Deserialize, Serialize};

/// Provider-agnostic metadata for a single title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMeta {
    /// Provider-specific ID
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year
    pub year: String,
    /// Poster image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Type-specific details
    #[serde(flatten)]
    pub details: MediaDetails,
}

/// Type-specific part of [`MediaMeta`]
///
/// Movies never carry season information; only the series variant can.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaDetails {
    Movie,
    Series {
        /// Season summaries, ordered by season number
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seasons: Option<Vec<SeasonMeta>>,
        /// Full detail of one season, when requested
        #[serde(default, skip_serializing_if = "Option::is_none")]
        season_data: Option<SeasonData>,
    },
}

impl MediaMeta {
    /// Internal media type of this title
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        match self.details {
            MediaDetails::Movie => MediaType::Movie,
            MediaDetails::Series { .. } => MediaType::Series,
        }
    }

    /// Season summaries, `None` for movies or when the provider sent none
    #[must_use]
    pub fn seasons(&self) -> Option<&[SeasonMeta]> {
        match &self.details {
            MediaDetails::Series {
                seasons: Some(seasons),
                ..
            } => Some(seasons),
            _ => None,
        }
    }

    /// Embedded season detail, if one was requested
    #[must_use]
    pub fn season_data(&self) -> Option<&SeasonData> {
        match &self.details {
            MediaDetails::Series {
                season_data: Some(data),
                ..
            } => Some(data),
            _ => None,
        }
    }
}

/// Season summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonMeta {
    pub id: String,
    /// Season number (0 for specials)
    pub number: i32,
    pub title: String,
}

/// Full season detail with its episode list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonData {
    pub id: String,
    pub number: i32,
    pub title: String,
    /// Episodes, ordered by episode number
    pub episodes: Vec<EpisodeMeta>,
}

/// Episode summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeMeta {
    pub id: String,
    pub number: i32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series() -> MediaMeta {
        MediaMeta {
            id: "42".to_string(),
            title: "Dark".to_string(),
            year: "2017".to_string(),
            poster: None,
            details: MediaDetails::Series {
                seasons: Some(vec![SeasonMeta {
                    id: "7".to_string(),
                    number: 1,
                    title: "Season 1".to_string(),
                }]),
                season_data: None,
            },
        }
    }

    #[test]
    fn test_media_type_follows_details() {
        let mut meta = series();
        assert_eq!(meta.media_type(), MediaType::Series);

        meta.details = MediaDetails::Movie;
        assert_eq!(meta.media_type(), MediaType::Movie);
        assert!(meta.seasons().is_none());
        assert!(meta.season_data().is_none());
    }

    #[test]
    fn test_movie_serializes_without_season_fields() {
        let meta = MediaMeta {
            id: "1".to_string(),
            title: "Heat".to_string(),
            year: "1995".to_string(),
            poster: Some("https://images.justwatch.com/p/s166".to_string()),
            details: MediaDetails::Movie,
        };

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "title": "Heat",
                "year": "1995",
                "poster": "https://images.justwatch.com/p/s166",
                "type": "movie",
            })
        );
    }

    #[test]
    fn test_series_json_roundtrip() {
        let meta = series();
        let value = serde_json::to_value(&meta).unwrap();

        assert_eq!(value["type"], "series");
        assert_eq!(value["seasons"][0]["number"], 1);
        assert!(value.get("season_data").is_none());
        assert!(value.get("poster").is_none());

        let back: MediaMeta = serde_json::from_value(value).unwrap();
        assert_eq!(back, meta);
    }
}
