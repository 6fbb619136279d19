use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::normalization::compare_locale;
use crate::types::CatalogItem;

/// Ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Locale-aware ascending on the display name.
    #[default]
    ByName,
    /// Locale-aware ascending on the category (brand).
    ByCategory,
    /// Most recent first.
    ByRecency,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::ByName, SortKey::ByCategory, SortKey::ByRecency];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ByName => "name",
            SortKey::ByCategory => "brand",
            SortKey::ByRecency => "recent",
        }
    }

    pub fn compare(&self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            SortKey::ByName => compare_locale(&a.name, &b.name),
            SortKey::ByCategory => compare_locale(&a.category, &b.category),
            SortKey::ByRecency => b.created_at.cmp(&a.created_at),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "by_name" => Ok(SortKey::ByName),
            "brand" | "category" | "by_category" => Ok(SortKey::ByCategory),
            "recent" | "recency" | "by_recency" => Ok(SortKey::ByRecency),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

/// Stable sort into a new sequence; the input is left untouched and ties keep
/// their input order.
pub fn sort<'a, I>(items: I, key: SortKey) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let mut sorted: Vec<&CatalogItem> = items.into_iter().collect();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
