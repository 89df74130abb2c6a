use serde::{Deserialize, Serialize};

use super::directory::{MetaFile, PartialDirectory};
use super::media::MediaItem;
use super::query::SearchQuery;

/// Outcome of one search evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query this result answers, echoed back verbatim
    pub search_query: SearchQuery,

    /// Matched directories, partial and deduplicated by id
    pub directories: Vec<PartialDirectory>,

    /// Matched media, capped at the configured maximum
    pub media: Vec<MediaItem>,

    /// Matched standalone metafiles
    pub metafiles: Vec<MetaFile>,

    /// True when the match set was truncated to the configured cap
    pub result_overflow: bool,
}
