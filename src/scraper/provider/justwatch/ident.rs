use super::convert::{kind_to_media_type, media_type_to_kind};
use crate::scraper::{
    Result,
    types::{MediaMeta, MediaType},
};
use serde::{Deserialize, Serialize};

/// Prefix identifying JustWatch references
pub const REF_PREFIX: &str = "JW";
const SEPARATOR: char = '-';

/// A title reference decoded from a `JW-<kind>-<id>` string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaRef {
    pub media_type: MediaType,
    /// Provider id, kept verbatim
    pub id: String,
}

impl MediaRef {
    pub fn new(media_type: MediaType, id: impl Into<String>) -> Self {
        Self {
            media_type,
            id: id.into(),
        }
    }

    /// Encode as `JW-<kind>-<id>`
    pub fn encode(&self) -> Result<String> {
        to_external_ref(self.media_type, &self.id)
    }

    /// Decode a reference string; `None` when it is not a JustWatch reference
    #[must_use]
    pub fn decode(input: &str) -> Option<Self> {
        from_external_ref(input)
    }
}

impl From<&MediaMeta> for MediaRef {
    fn from(meta: &MediaMeta) -> Self {
        Self::new(meta.media_type(), meta.id.clone())
    }
}

impl MediaMeta {
    /// External reference naming this title
    pub fn external_ref(&self) -> Result<String> {
        to_external_ref(self.media_type(), &self.id)
    }
}

/// Build the `JW-<kind>-<id>` reference for a title
pub fn to_external_ref(media_type: MediaType, id: &str) -> Result<String> {
    let kind = media_type_to_kind(media_type)?;
    Ok(format!("{REF_PREFIX}{SEPARATOR}{kind}{SEPARATOR}{id}"))
}

/// Parse a `JW-<kind>-<id>` reference.
///
/// Only the first two separators are significant, so the id may contain `-`.
/// An empty id (`JW-movie-`) is kept as-is so every encoded reference decodes.
/// Never fails: anything that is not a well-formed JustWatch reference yields `None`.
#[must_use]
pub fn from_external_ref(input: &str) -> Option<MediaRef> {
    let mut parts = input.splitn(3, SEPARATOR);

    if parts.next()? != REF_PREFIX {
        return None;
    }
    let media_type = kind_to_media_type(parts.next()?).ok()?;
    let id = parts.next()?;

    Some(MediaRef::new(media_type, id))
}
