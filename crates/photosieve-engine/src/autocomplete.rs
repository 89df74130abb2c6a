//! Ranked autocomplete suggestions

use std::collections::BTreeSet;

use photosieve_core::models::{AutoCompleteItem, TextCategory};
use photosieve_core::ports::{CatalogReader, Gazetteer};
use photosieve_core::Result;

use crate::search::SearchEngine;

impl<C, G> SearchEngine<C, G>
where
    C: CatalogReader,
    G: Gazetteer,
{
    /// Distinct suggestions containing `text`, capped per category
    ///
    /// `any_text` scans every category; any other target scans only
    /// itself. The combined list is ordered by (text, category).
    pub async fn autocomplete(
        &self,
        text: &str,
        category: TextCategory,
    ) -> Result<Vec<AutoCompleteItem>> {
        let needle = text.to_lowercase();
        let cap = self.limits.autocomplete_max_per_category;
        let mut items: Vec<AutoCompleteItem> = Vec::new();

        for scanned in scanned_categories(category) {
            let values = match scanned {
                TextCategory::Caption => self.catalog.distinct_captions().await?,
                TextCategory::Directory => self.catalog.distinct_directory_names().await?,
                TextCategory::FileName => self.catalog.distinct_file_names().await?,
                TextCategory::Keyword => self.catalog.distinct_keywords().await?,
                TextCategory::Person => self.catalog.distinct_persons().await?,
                TextCategory::Position => self.catalog.distinct_positions().await?,
                TextCategory::AnyText => unreachable!("any_text expands to concrete categories"),
            };
            items.extend(rank_category(values, scanned, &needle, cap));
        }

        items.sort();
        Ok(items)
    }
}

fn scanned_categories(target: TextCategory) -> Vec<TextCategory> {
    match target {
        TextCategory::AnyText => vec![
            TextCategory::Caption,
            TextCategory::Directory,
            TextCategory::FileName,
            TextCategory::Keyword,
            TextCategory::Person,
            TextCategory::Position,
        ],
        other => vec![other],
    }
}

/// Distinct matching values of one category, capped
///
/// Values deduplicate case-insensitively while keeping their original
/// casing. Sorting before the cap makes truncation deterministic, and a
/// category at or under the cap comes back exhaustively.
fn rank_category(
    values: Vec<String>,
    category: TextCategory,
    needle: &str,
    cap: usize,
) -> Vec<AutoCompleteItem> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut hits: Vec<String> = Vec::new();

    for value in values {
        let lower = value.to_lowercase();
        if !lower.contains(needle) {
            continue;
        }
        if seen.insert(lower) {
            hits.push(value);
        }
    }

    hits.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    hits.truncate(cap);

    hits.into_iter()
        .map(|text| AutoCompleteItem::new(text, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_category_filters_by_substring() {
        let values = vec![
            "glacier lagoon".to_string(),
            "harbor".to_string(),
            "Glacier hike".to_string(),
        ];
        let items = rank_category(values, TextCategory::Keyword, "glacier", 10);

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.category == TextCategory::Keyword));
        assert!(items.iter().any(|item| item.text == "glacier lagoon"));
        assert!(items.iter().any(|item| item.text == "Glacier hike"));
    }

    #[test]
    fn test_rank_category_dedups_case_insensitively() {
        let values = vec![
            "Aurora".to_string(),
            "aurora".to_string(),
            "AURORA".to_string(),
        ];
        let items = rank_category(values, TextCategory::Keyword, "aurora", 10);

        // First-seen casing survives
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Aurora");
    }

    #[test]
    fn test_rank_category_cap_is_deterministic() {
        let values = vec![
            "delta".to_string(),
            "bravo".to_string(),
            "alpha".to_string(),
            "charlie".to_string(),
        ];
        let items = rank_category(values, TextCategory::Person, "a", 2);

        let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "bravo"]);
    }

    #[test]
    fn test_under_cap_category_is_exhaustive() {
        let values = vec!["alpha".to_string(), "bravo".to_string()];
        let items = rank_category(values, TextCategory::Person, "a", 5);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_scanned_categories() {
        assert_eq!(scanned_categories(TextCategory::Keyword), vec![TextCategory::Keyword]);

        let all = scanned_categories(TextCategory::AnyText);
        assert_eq!(all.len(), 6);
        assert!(!all.contains(&TextCategory::AnyText));
    }
}
