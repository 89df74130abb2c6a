//! Boolean query combinators
//!
//! Recursive, depth-first evaluation of AND/OR/SOME_OF trees. Leaves are
//! pure, so evaluation order only affects performance; each node evaluates
//! independently per catalog item and the walk holds no state across
//! calls, making it safe to run concurrently over one snapshot.

use photosieve_core::models::{MediaItem, SearchQuery};

use crate::evaluator::{self, EvalContext};

/// Evaluate the query tree against one catalog item
pub fn matches(query: &SearchQuery, item: &MediaItem, ctx: &EvalContext<'_>) -> bool {
    match query {
        SearchQuery::And { list } => {
            !list.is_empty() && list.iter().all(|child| matches(child, item, ctx))
        }
        SearchQuery::Or { list } => list.iter().any(|child| matches(child, item, ctx)),
        SearchQuery::SomeOf { list, min } => some_of_matches(list, *min, item, ctx),
        SearchQuery::Text(leaf) => evaluator::text_matches(leaf, item, ctx),
        SearchQuery::FromDate { value, negate } => {
            evaluator::from_date_matches(item, *value, *negate)
        }
        SearchQuery::ToDate { value, negate } => evaluator::to_date_matches(item, *value, *negate),
        SearchQuery::MinRating { value, negate } => {
            evaluator::min_rating_matches(item, *value, *negate)
        }
        SearchQuery::MaxRating { value, negate } => {
            evaluator::max_rating_matches(item, *value, *negate)
        }
        SearchQuery::MinResolution { value, negate } => {
            evaluator::min_resolution_matches(item, *value, *negate)
        }
        SearchQuery::MaxResolution { value, negate } => {
            evaluator::max_resolution_matches(item, *value, *negate)
        }
        SearchQuery::Orientation { landscape } => evaluator::orientation_matches(item, *landscape),
        SearchQuery::Distance(leaf) => evaluator::distance_matches(leaf, item, ctx),
    }
}

/// SOME_OF with `min` clamped to [1, len]; an empty child list never
/// matches. Stops counting once the threshold is reached.
fn some_of_matches(
    list: &[SearchQuery],
    min: Option<usize>,
    item: &MediaItem,
    ctx: &EvalContext<'_>,
) -> bool {
    if list.is_empty() {
        return false;
    }
    let required = min.unwrap_or(1).clamp(1, list.len());

    let mut matched = 0;
    for child in list {
        if matches(child, item, ctx) {
            matched += 1;
            if matched >= required {
                return true;
            }
        }
    }
    false
}
