//! JustWatch catalog provider.
//!
//! `api_types` mirrors the JSON the catalog API returns, `convert` turns those
//! records into [`MediaMeta`](crate::scraper::MediaMeta), and `ident` owns the
//! `JW-<kind>-<id>` reference format used to name a title across the system.

mod api_types;
mod convert;
mod ident;
mod provider;

pub use api_types::{
    ContentKind, JwEpisodeShort, JwMediaResult, JwSeasonMetaResult, JwSeasonShort,
};
pub use convert::{format_meta, kind_to_media_type, media_type_to_kind, poster_url};
pub use ident::{MediaRef, REF_PREFIX, from_external_ref, to_external_ref};
pub use provider::JustWatchProvider;

pub const JW_API_BASE: &str = "https://apis.justwatch.com";
pub const JW_IMAGE_BASE: &str = "https://images.justwatch.com";
