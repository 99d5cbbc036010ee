mod media;
mod metadata;

pub use media::MediaType;
pub use metadata::{EpisodeMeta, MediaDetails, MediaMeta, SeasonData, SeasonMeta};
