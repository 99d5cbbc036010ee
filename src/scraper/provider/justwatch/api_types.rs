use crate::scraper::ScraperError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Content type tag used by the JustWatch API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Show,
}

impl ContentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "show",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "show" => Ok(Self::Show),
            other => Err(ScraperError::UnsupportedType(other.to_string())),
        }
    }
}

// Title responses
#[derive(Debug, Clone, Deserialize)]
pub struct JwMediaResult {
    pub title: String,
    /// Path template containing a `{profile}` placeholder
    pub poster: Option<String>,
    pub id: i64,
    pub original_release_year: i32,
    pub jw_entity_id: String,
    /// Kept raw so unknown kinds surface as `UnsupportedType` instead of a parse error
    pub object_type: String,
    pub seasons: Option<Vec<JwSeasonShort>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwSeasonShort {
    pub title: String,
    pub id: i64,
    pub season_number: i32,
}

// Season responses
#[derive(Debug, Clone, Deserialize)]
pub struct JwSeasonMetaResult {
    pub title: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub season_number: i32,
    #[serde(default)]
    pub episodes: Vec<JwEpisodeShort>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwEpisodeShort {
    pub title: String,
    pub id: i64,
    pub episode_number: i32,
}

// Search
#[derive(Debug, Serialize)]
pub(super) struct SearchBody<'a> {
    pub content_types: Vec<ContentKind>,
    pub page: u32,
    pub page_size: usize,
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<JwMediaResult>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
