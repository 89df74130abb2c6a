//! Search evaluation and result aggregation

use std::collections::BTreeMap;

use photosieve_core::config::SearchLimits;
use photosieve_core::models::{
    DirectoryId, DirectoryTree, MediaItem, MetaFile, MetaFileId, PartialDirectory, SearchQuery,
    SearchResult, TextCategory,
};
use photosieve_core::ports::{CatalogReader, CatalogSnapshot, Gazetteer};
use photosieve_core::Result;

use crate::combinator;
use crate::evaluator::{EvalContext, TextMatcher};
use crate::resolve::{self, ResolvedPlaces};

/// Search engine over a catalog and a gazetteer
///
/// Holds no mutable state: every call builds its result from a fresh
/// catalog snapshot, so arbitrarily many calls may run concurrently.
pub struct SearchEngine<C, G>
where
    C: CatalogReader,
    G: Gazetteer,
{
    pub(crate) catalog: C,
    pub(crate) gazetteer: G,
    pub(crate) limits: SearchLimits,
}

impl<C, G> SearchEngine<C, G>
where
    C: CatalogReader,
    G: Gazetteer,
{
    pub fn new(catalog: C, gazetteer: G, limits: SearchLimits) -> Self {
        Self {
            catalog,
            gazetteer,
            limits,
        }
    }

    /// Evaluate a structured query and aggregate the result
    ///
    /// Validation runs before any catalog access; the gazetteer is awaited
    /// once per distinct place name; the scan itself is synchronous and
    /// pure.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        query.validate()?;
        let snapshot = self.catalog.snapshot().await?;
        let places = resolve::resolve_places(query, &self.gazetteer).await?;
        Ok(self.evaluate(query, &snapshot, &places))
    }

    /// Pure scan and aggregation over a resolved snapshot
    fn evaluate(
        &self,
        query: &SearchQuery,
        snapshot: &CatalogSnapshot,
        places: &ResolvedPlaces,
    ) -> SearchResult {
        let ctx = EvalContext {
            tree: &snapshot.tree,
            places,
        };

        let mut media: Vec<MediaItem> = snapshot
            .media
            .iter()
            .filter(|item| combinator::matches(query, item, &ctx))
            .cloned()
            .collect();

        // Directory ancestry of every matched item, recorded before the
        // cap so the directory set reflects the full match set
        let mut directories: BTreeMap<DirectoryId, PartialDirectory> = BTreeMap::new();
        for item in &media {
            for ancestor in snapshot.tree.ancestry(item.directory) {
                if let Some(partial) = snapshot.tree.partial(ancestor) {
                    directories.entry(ancestor).or_insert(partial);
                }
            }
        }

        // A root-level directory/any_text text leaf also matches
        // directories directly, empty ones included, and pulls in the
        // metafiles of matching directories
        let mut metafiles: BTreeMap<MetaFileId, MetaFile> = BTreeMap::new();
        if let SearchQuery::Text(leaf) = query {
            if matches!(leaf.category, TextCategory::Directory | TextCategory::AnyText) {
                let matcher = TextMatcher::new(leaf);
                for node in snapshot.tree.iter() {
                    let raw = directory_hit(&matcher, leaf.category, &snapshot.tree, node.id);
                    if raw != leaf.negate {
                        if let Some(partial) = snapshot.tree.partial(node.id) {
                            directories.entry(node.id).or_insert(partial);
                        }
                    }
                }
                for metafile in &snapshot.metafiles {
                    let raw =
                        directory_hit(&matcher, leaf.category, &snapshot.tree, metafile.directory);
                    if raw != leaf.negate {
                        metafiles.entry(metafile.id).or_insert_with(|| metafile.clone());
                    }
                }
            }
        }

        // Deterministic truncation rule: ascending media id
        media.sort_by_key(|item| item.id);
        let matched_total = media.len();
        let result_overflow = matched_total > self.limits.max_media_result;
        if result_overflow {
            media.truncate(self.limits.max_media_result);
        }

        tracing::debug!(
            scanned = snapshot.media.len(),
            matched = matched_total,
            overflow = result_overflow,
            "search scan complete"
        );

        SearchResult {
            search_query: query.clone(),
            directories: directories.into_values().collect(),
            media,
            metafiles: metafiles.into_values().collect(),
            result_overflow,
        }
    }
}

/// Raw (pre-negation) directory path match for one node
fn directory_hit(
    matcher: &TextMatcher,
    category: TextCategory,
    tree: &DirectoryTree,
    id: DirectoryId,
) -> bool {
    match category {
        TextCategory::Directory => matcher.matches(&tree.absolute_path(id)),
        // any_text compares individual path segments
        _ => tree.path_segments(id).iter().any(|segment| matcher.matches(segment)),
    }
}
