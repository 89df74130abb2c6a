//! Leaf predicate evaluation
//!
//! Matches one catalog item against one leaf predicate. Missing optional
//! metadata is absence, not error: the raw predicate is false over an
//! absent field, and negation inverts that like any other result.

use photosieve_core::models::{
    DirectoryTree, DistanceOrigin, DistanceQuery, MatchMode, MediaItem, TextCategory, TextQuery,
};

use crate::geo::distance_km;
use crate::resolve::ResolvedPlaces;

/// Per-call evaluation context borrowed from the catalog snapshot
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    pub tree: &'a DirectoryTree,
    pub places: &'a ResolvedPlaces,
}

/// Case-insensitive text comparison with the needle lowered once
pub struct TextMatcher {
    needle: String,
    mode: MatchMode,
}

impl TextMatcher {
    pub fn new(leaf: &TextQuery) -> Self {
        Self {
            needle: leaf.text.to_lowercase(),
            mode: leaf.match_mode,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        match self.mode {
            MatchMode::Contains => lower.contains(&self.needle),
            MatchMode::Exact => lower == self.needle,
        }
    }
}

/// Text leaf against the candidate strings of its category
///
/// The directory category compares the item's absolute directory path,
/// leading separator included; any_text adds the individual path segments
/// instead, alongside every other textual field.
pub fn text_matches(leaf: &TextQuery, item: &MediaItem, ctx: &EvalContext<'_>) -> bool {
    let matcher = TextMatcher::new(leaf);
    let meta = &item.metadata;

    let caption_hit = || meta.caption.as_deref().is_some_and(|c| matcher.matches(c));
    let keyword_hit = || meta.keywords.iter().any(|k| matcher.matches(k));
    let person_hit = || meta.faces.iter().any(|f| matcher.matches(&f.name));
    let position_hit = || {
        meta.position
            .as_ref()
            .is_some_and(|p| p.place_names().any(|n| matcher.matches(n)))
    };

    let hit = match leaf.category {
        TextCategory::FileName => matcher.matches(&item.name),
        TextCategory::Caption => caption_hit(),
        TextCategory::Keyword => keyword_hit(),
        TextCategory::Person => person_hit(),
        TextCategory::Position => position_hit(),
        TextCategory::Directory => matcher.matches(&ctx.tree.absolute_path(item.directory)),
        TextCategory::AnyText => {
            matcher.matches(&item.name)
                || caption_hit()
                || keyword_hit()
                || person_hit()
                || position_hit()
                || ctx
                    .tree
                    .path_segments(item.directory)
                    .iter()
                    .any(|segment| matcher.matches(segment))
        }
    };

    hit != leaf.negate
}

pub fn from_date_matches(item: &MediaItem, value: i64, negate: bool) -> bool {
    (item.metadata.creation_date >= value) != negate
}

pub fn to_date_matches(item: &MediaItem, value: i64, negate: bool) -> bool {
    (item.metadata.creation_date <= value) != negate
}

pub fn min_rating_matches(item: &MediaItem, value: u8, negate: bool) -> bool {
    (item.metadata.effective_rating() >= value) != negate
}

pub fn max_rating_matches(item: &MediaItem, value: u8, negate: bool) -> bool {
    (item.metadata.effective_rating() <= value) != negate
}

pub fn min_resolution_matches(item: &MediaItem, value: f64, negate: bool) -> bool {
    (item.metadata.megapixels() >= value) != negate
}

pub fn max_resolution_matches(item: &MediaItem, value: f64, negate: bool) -> bool {
    (item.metadata.megapixels() <= value) != negate
}

/// Landscape means display width >= display height, after the EXIF
/// orientation correction
pub fn orientation_matches(item: &MediaItem, landscape: bool) -> bool {
    let size = item.metadata.oriented_size();
    (size.width >= size.height) == landscape
}

/// Distance leaf
///
/// The raw predicate is false when the origin did not resolve or the item
/// has no GPS fix; negation inverts last, so an unresolvable origin under
/// negation matches everything.
pub fn distance_matches(leaf: &DistanceQuery, item: &MediaItem, ctx: &EvalContext<'_>) -> bool {
    let origin = match &leaf.from {
        DistanceOrigin::Gps(coordinate) => Some(*coordinate),
        DistanceOrigin::PlaceName(name) => ctx.places.get(name),
    };
    let gps = item.metadata.position.as_ref().and_then(|p| p.gps);

    let hit = match (origin, gps) {
        (Some(origin), Some(gps)) => distance_km(&origin, &gps) <= leaf.distance_km,
        _ => false,
    };

    hit != leaf.negate
}
