//! Gazetteer resolution pre-pass
//!
//! Distance predicates may name a place instead of carrying a coordinate.
//! Every distinct name in a query is resolved once, before the catalog
//! scan, so the scan itself stays synchronous and pure.

use std::collections::HashMap;

use futures::future;
use photosieve_core::models::{GpsCoordinate, SearchQuery};
use photosieve_core::ports::Gazetteer;
use photosieve_core::Result;

/// Place names resolved for the current call
///
/// Names the gazetteer could not resolve are absent; a distance predicate
/// with an absent origin matches nothing (fails closed). Results are not
/// cached beyond the call that produced them.
#[derive(Debug, Clone, Default)]
pub struct ResolvedPlaces {
    coordinates: HashMap<String, GpsCoordinate>,
}

impl ResolvedPlaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<GpsCoordinate> {
        self.coordinates.get(name).copied()
    }

    /// Register a pre-resolved name
    pub fn insert(&mut self, name: impl Into<String>, coordinate: GpsCoordinate) {
        self.coordinates.insert(name.into(), coordinate);
    }
}

/// Resolve every place name referenced by the query
///
/// Distinct names are looked up concurrently, each exactly once per call.
/// A name the gazetteer does not know is logged and skipped; a gazetteer
/// transport failure propagates unchanged.
pub async fn resolve_places<G: Gazetteer>(
    query: &SearchQuery,
    gazetteer: &G,
) -> Result<ResolvedPlaces> {
    let mut names = query.place_names();
    names.sort_unstable();
    names.dedup();

    let lookups = names.iter().map(|name| gazetteer.resolve_place_name(name));
    let outcomes = future::join_all(lookups).await;

    let mut resolved = ResolvedPlaces::new();
    for (name, outcome) in names.into_iter().zip(outcomes) {
        match outcome? {
            Some(coordinate) => resolved.insert(name, coordinate),
            None => tracing::warn!(
                place = %name,
                "Place name did not resolve; distance predicate matches nothing"
            ),
        }
    }

    Ok(resolved)
}
