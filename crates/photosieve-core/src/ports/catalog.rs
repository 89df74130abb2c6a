use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DirectoryTree, MediaItem, MetaFile};

/// Consistent read view of the whole catalog
///
/// Constructed fresh per call by the catalog collaborator and shared
/// immutably for the duration of one evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub media: Vec<MediaItem>,
    pub tree: DirectoryTree,
    pub metafiles: Vec<MetaFile>,
}

/// Port for read access to the media catalog
///
/// The distinct-value listings are treated as already materialized by the
/// backing store; the engine never derives them from a media scan.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Full candidate set: all media, the directory tree, and metafiles
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>>;

    async fn distinct_keywords(&self) -> Result<Vec<String>>;

    async fn distinct_persons(&self) -> Result<Vec<String>>;

    /// Country, state, and city names
    async fn distinct_positions(&self) -> Result<Vec<String>>;

    async fn distinct_captions(&self) -> Result<Vec<String>>;

    async fn distinct_file_names(&self) -> Result<Vec<String>>;

    async fn distinct_directory_names(&self) -> Result<Vec<String>>;
}
