use serde::{Deserialize, Serialize};

use super::media::GpsCoordinate;
use crate::error::{PhotosieveError, Result};

/// Category a text predicate matches against
///
/// The declaration order is the category tie-break order used when sorting
/// autocomplete suggestions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TextCategory {
    /// Every textual field at once
    AnyText,
    Caption,
    Directory,
    FileName,
    Keyword,
    Person,
    Position,
}

/// Substring or whole-string comparison; always case-insensitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Contains,
    Exact,
}

/// Text leaf predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextQuery {
    pub category: TextCategory,
    pub text: String,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub negate: bool,
}

/// Origin of a distance predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceOrigin {
    /// Resolved through the gazetteer at evaluation time
    PlaceName(String),
    Gps(GpsCoordinate),
}

/// Distance leaf predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceQuery {
    pub from: DistanceOrigin,
    /// Search radius in kilometers
    pub distance_km: f64,
    #[serde(default)]
    pub negate: bool,
}

/// Structured search query: a tree of leaf predicates and boolean
/// combinators
///
/// Combinator children are themselves query nodes and may nest arbitrarily;
/// a leaf never contains children. The serde form is internally tagged so
/// the tree round-trips losslessly through any transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchQuery {
    Text(TextQuery),

    /// Creation date at or after the value (epoch ms)
    FromDate {
        value: i64,
        #[serde(default)]
        negate: bool,
    },

    /// Creation date at or before the value (epoch ms)
    ToDate {
        value: i64,
        #[serde(default)]
        negate: bool,
    },

    MinRating {
        value: u8,
        #[serde(default)]
        negate: bool,
    },

    MaxRating {
        value: u8,
        #[serde(default)]
        negate: bool,
    },

    /// Value in megapixels
    MinResolution {
        value: f64,
        #[serde(default)]
        negate: bool,
    },

    /// Value in megapixels
    MaxResolution {
        value: f64,
        #[serde(default)]
        negate: bool,
    },

    /// Landscape means display width >= display height
    Orientation { landscape: bool },

    Distance(DistanceQuery),

    /// Matches when every child matches
    And { list: Vec<SearchQuery> },

    /// Matches when at least one child matches
    Or { list: Vec<SearchQuery> },

    /// Matches when at least `min` children match; `min` defaults to 1,
    /// making an unconstrained SOME_OF equivalent to OR
    SomeOf {
        list: Vec<SearchQuery>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
    },
}

impl SearchQuery {
    pub fn and(list: Vec<SearchQuery>) -> Self {
        SearchQuery::And { list }
    }

    pub fn or(list: Vec<SearchQuery>) -> Self {
        SearchQuery::Or { list }
    }

    pub fn some_of(list: Vec<SearchQuery>, min: Option<usize>) -> Self {
        SearchQuery::SomeOf { list, min }
    }

    /// Shorthand for a non-negated contains-mode text leaf
    pub fn text(category: TextCategory, text: impl Into<String>) -> Self {
        SearchQuery::Text(TextQuery {
            category,
            text: text.into(),
            match_mode: MatchMode::Contains,
            negate: false,
        })
    }

    fn kind_name(&self) -> &'static str {
        match self {
            SearchQuery::Text(_) => "text",
            SearchQuery::FromDate { .. } => "from_date",
            SearchQuery::ToDate { .. } => "to_date",
            SearchQuery::MinRating { .. } => "min_rating",
            SearchQuery::MaxRating { .. } => "max_rating",
            SearchQuery::MinResolution { .. } => "min_resolution",
            SearchQuery::MaxResolution { .. } => "max_resolution",
            SearchQuery::Orientation { .. } => "orientation",
            SearchQuery::Distance(_) => "distance",
            SearchQuery::And { .. } => "AND",
            SearchQuery::Or { .. } => "OR",
            SearchQuery::SomeOf { .. } => "SOME_OF",
        }
    }

    /// Validate the tree before any catalog scan
    ///
    /// Combinator nodes with no children and non-finite or negative
    /// distance radii are rejected here so malformed trees fail fast
    /// instead of silently matching nothing.
    pub fn validate(&self) -> Result<()> {
        match self {
            SearchQuery::And { list } | SearchQuery::Or { list } | SearchQuery::SomeOf { list, .. } => {
                if list.is_empty() {
                    return Err(PhotosieveError::InvalidQuery {
                        reason: format!("{} combinator has no children", self.kind_name()),
                    });
                }
                for child in list {
                    child.validate()?;
                }
                Ok(())
            }
            SearchQuery::Distance(leaf) => {
                if !leaf.distance_km.is_finite() || leaf.distance_km < 0.0 {
                    return Err(PhotosieveError::InvalidQuery {
                        reason: format!("distance radius {} km is not usable", leaf.distance_km),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Place names referenced by distance leaves anywhere in the tree
    pub fn place_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_place_names(&mut names);
        names
    }

    fn collect_place_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            SearchQuery::Distance(DistanceQuery {
                from: DistanceOrigin::PlaceName(name),
                ..
            }) => names.push(name.as_str()),
            SearchQuery::And { list } | SearchQuery::Or { list } | SearchQuery::SomeOf { list, .. } => {
                for child in list {
                    child.collect_place_names(names);
                }
            }
            _ => {}
        }
    }
}
