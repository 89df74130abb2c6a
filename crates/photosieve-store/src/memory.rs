//! In-memory catalog and gazetteer for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock
//! poisoning only occurs when another thread panicked while holding the
//! lock, which is an unrecoverable state. Builder methods panic on ids
//! that were not issued by the same catalog.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use photosieve_core::error::Result;
use photosieve_core::models::{
    DirectoryId, DirectoryTree, GpsCoordinate, MediaId, MediaItem, MediaMetadata, MediaType,
    MetaFile, MetaFileId,
};
use photosieve_core::ports::{CatalogReader, CatalogSnapshot, Gazetteer};

/// In-memory implementation of the catalog port
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    inner: Arc<RwLock<CatalogState>>,
}

#[derive(Debug, Clone, Default)]
struct CatalogState {
    media: Vec<MediaItem>,
    tree: DirectoryTree,
    metafiles: Vec<MetaFile>,
    next_media_id: u64,
    next_metafile_id: u64,
}

impl MemoryCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory; `None` parent creates a catalog root
    pub fn add_directory(&self, name: &str, parent: Option<DirectoryId>) -> DirectoryId {
        let mut state = self.inner.write().unwrap();
        state.tree.add_node(name, parent)
    }

    /// Add one media entry and register it with its directory
    ///
    /// The media type is classified from the file extension.
    pub fn add_media(
        &self,
        directory: DirectoryId,
        name: &str,
        metadata: MediaMetadata,
    ) -> MediaId {
        let mut state = self.inner.write().unwrap();

        let id = MediaId(state.next_media_id);
        state.next_media_id += 1;

        state.media.push(MediaItem {
            id,
            name: name.to_string(),
            directory,
            media_type: MediaType::from_file_name(name),
            metadata,
        });
        state
            .tree
            .get_mut(directory)
            .expect("directory id issued by this catalog")
            .media
            .push(id);
        id
    }

    /// Mark one media entry as a directory's preview
    pub fn set_preview(&self, directory: DirectoryId, media: MediaId) {
        let mut state = self.inner.write().unwrap();
        state
            .tree
            .get_mut(directory)
            .expect("directory id issued by this catalog")
            .preview = Some(media);
    }

    /// Attach a standalone metafile to a directory
    pub fn add_metafile(&self, directory: DirectoryId, name: &str) -> MetaFileId {
        let mut state = self.inner.write().unwrap();

        let id = MetaFileId(state.next_metafile_id);
        state.next_metafile_id += 1;

        state.metafiles.push(MetaFile {
            id,
            name: name.to_string(),
            directory,
        });
        state
            .tree
            .get_mut(directory)
            .expect("directory id issued by this catalog")
            .metafiles
            .push(id);
        id
    }
}

/// Case-insensitive dedup preserving first-seen casing, ordered by the
/// lowered form
fn distinct<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut unique: BTreeMap<String, String> = BTreeMap::new();
    for value in values {
        unique.entry(value.to_lowercase()).or_insert(value);
    }
    unique.into_values().collect()
}

#[async_trait]
impl CatalogReader for MemoryCatalog {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        let state = self.inner.read().unwrap();
        Ok(Arc::new(CatalogSnapshot {
            media: state.media.clone(),
            tree: state.tree.clone(),
            metafiles: state.metafiles.clone(),
        }))
    }

    async fn distinct_keywords(&self) -> Result<Vec<String>> {
        let state = self.inner.read().unwrap();
        Ok(distinct(
            state
                .media
                .iter()
                .flat_map(|item| item.metadata.keywords.iter().cloned()),
        ))
    }

    async fn distinct_persons(&self) -> Result<Vec<String>> {
        let state = self.inner.read().unwrap();
        Ok(distinct(
            state
                .media
                .iter()
                .flat_map(|item| item.metadata.faces.iter().map(|face| face.name.clone())),
        ))
    }

    async fn distinct_positions(&self) -> Result<Vec<String>> {
        let state = self.inner.read().unwrap();
        Ok(distinct(state.media.iter().flat_map(|item| {
            item.metadata
                .position
                .iter()
                .flat_map(|position| position.place_names().map(str::to_string))
        })))
    }

    async fn distinct_captions(&self) -> Result<Vec<String>> {
        let state = self.inner.read().unwrap();
        Ok(distinct(
            state
                .media
                .iter()
                .filter_map(|item| item.metadata.caption.clone()),
        ))
    }

    async fn distinct_file_names(&self) -> Result<Vec<String>> {
        let state = self.inner.read().unwrap();
        Ok(distinct(state.media.iter().map(|item| item.name.clone())))
    }

    async fn distinct_directory_names(&self) -> Result<Vec<String>> {
        let state = self.inner.read().unwrap();
        Ok(distinct(state.tree.iter().map(|node| node.name.clone())))
    }
}

/// In-memory gazetteer backed by a fixed name table
///
/// Lookups are case-insensitive. Unknown names resolve to `None`, the
/// same contract a remote gazetteer has for "not found".
#[derive(Debug, Clone, Default)]
pub struct MemoryGazetteer {
    places: Arc<RwLock<HashMap<String, GpsCoordinate>>>,
}

impl MemoryGazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolvable place name
    pub fn add_place(&self, name: &str, coordinate: GpsCoordinate) {
        let mut places = self.places.write().unwrap();
        places.insert(name.to_lowercase(), coordinate);
    }
}

#[async_trait]
impl Gazetteer for MemoryGazetteer {
    async fn resolve_place_name(&self, name: &str) -> Result<Option<GpsCoordinate>> {
        let places = self.places.read().unwrap();
        Ok(places.get(&name.to_lowercase()).copied())
    }
}
