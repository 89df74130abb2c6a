//! Random selection over query matches

use rand::seq::IndexedRandom;

use photosieve_core::models::{MediaItem, SearchQuery};
use photosieve_core::ports::{CatalogReader, Gazetteer};
use photosieve_core::Result;

use crate::combinator;
use crate::evaluator::EvalContext;
use crate::resolve;
use crate::search::SearchEngine;

impl<C, G> SearchEngine<C, G>
where
    C: CatalogReader,
    G: Gazetteer,
{
    /// One uniformly chosen photo matching the query
    ///
    /// Videos are excluded from the candidate set; `None` means the match
    /// set was empty.
    pub async fn random_photo(&self, query: &SearchQuery) -> Result<Option<MediaItem>> {
        query.validate()?;
        let snapshot = self.catalog.snapshot().await?;
        let places = resolve::resolve_places(query, &self.gazetteer).await?;
        let ctx = EvalContext {
            tree: &snapshot.tree,
            places: &places,
        };

        let photos: Vec<&MediaItem> = snapshot
            .media
            .iter()
            .filter(|item| item.is_photo())
            .filter(|item| combinator::matches(query, item, &ctx))
            .collect();

        Ok(photos.choose(&mut rand::rng()).map(|item| (*item).clone()))
    }
}
