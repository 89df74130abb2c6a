use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::query::TextCategory;

/// A single autocomplete suggestion
///
/// Equality and ordering key is the (text, category) pair: suggestion text
/// first, category declaration order as the tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCompleteItem {
    pub text: String,
    pub category: TextCategory,
}

impl AutoCompleteItem {
    pub fn new(text: impl Into<String>, category: TextCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

impl Ord for AutoCompleteItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text
            .cmp(&other.text)
            .then_with(|| self.category.cmp(&other.category))
    }
}

impl PartialOrd for AutoCompleteItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
