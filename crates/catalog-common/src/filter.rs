use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalization::{compare_locale, fold_case};
use crate::types::CatalogItem;

/// Free-text query plus exact category restriction. Empty strings mean "no restriction".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub category_filter: String,
}

impl FilterState {
    pub fn new(search_query: impl Into<String>, category_filter: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            category_filter: category_filter.into(),
        }
    }

    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        filter(items, &self.search_query, &self.category_filter)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty() || !self.category_filter.is_empty()
    }

    /// Number of active restrictions, shown as a badge next to the filter toggle.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search_query.is_empty()) + usize::from(!self.category_filter.is_empty())
    }

    pub fn clear(&mut self) {
        self.search_query.clear();
        self.category_filter.clear();
    }
}

/// Keep items whose searchable fields contain `query` (case-insensitive) and
/// whose category equals `category` exactly. Input order is preserved.
pub fn filter<'a>(items: &'a [CatalogItem], query: &str, category: &str) -> Vec<&'a CatalogItem> {
    let needle = fold_case(query);
    items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .filter(|item| category.is_empty() || item.category == category)
        .collect()
}

/// `needle` must already be case-folded.
fn matches_query(item: &CatalogItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.searchable_fields()
        .iter()
        .any(|field| fold_case(field).contains(needle))
}

/// A distinct category and how many items carry it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Distinct non-empty categories with their item counts, in locale order.
pub fn category_counts(items: &[CatalogItem]) -> Vec<CategoryCount> {
    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items.iter().filter(|i| !i.category.is_empty()) {
        *by_category.entry(item.category.as_str()).or_insert(0) += 1;
    }
    let mut counts: Vec<CategoryCount> = by_category
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| compare_locale(&a.category, &b.category));
    counts
}
