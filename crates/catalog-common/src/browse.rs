use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FilterState;
use crate::pagination::{PageInfo, PageMarker, Paginator, ResetPolicy};
use crate::sort::{sort, SortKey};
use crate::types::CatalogItem;

/// Caller-owned browsing state: the query, the sort key and the current page.
///
/// Views mutate it from input events and call [`BrowseState::recompute`] after
/// each change; stale results are simply discarded by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseState {
    pub filter: FilterState,
    pub sort_key: SortKey,
    pub paginator: Paginator,
}

/// One rendered page of the pipeline output.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowsePage {
    pub items: Vec<CatalogItem>,
    pub info: PageInfo,
    pub window: Vec<PageMarker>,
    /// Number of items left after filtering, across all pages.
    pub matched: usize,
}

impl BrowseState {
    pub fn new(page_size: usize) -> Result<Self> {
        Self::with_policy(page_size, ResetPolicy::default())
    }

    pub fn with_policy(page_size: usize, policy: ResetPolicy) -> Result<Self> {
        Ok(Self {
            filter: FilterState::default(),
            sort_key: SortKey::default(),
            paginator: Paginator::with_policy(page_size, policy)?,
        })
    }

    pub fn sized(page_size: NonZeroUsize, policy: ResetPolicy, sort_key: SortKey) -> Self {
        Self {
            filter: FilterState::default(),
            sort_key,
            paginator: Paginator::sized(page_size, policy),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category_filter = category.into();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Clears both filters and restores the default name ordering.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.sort_key = SortKey::default();
    }

    /// filter -> sort -> paginator sync -> slice.
    pub fn recompute(&mut self, items: &[CatalogItem]) -> BrowsePage {
        let filtered = self.filter.apply(items);
        let ordered = sort(filtered, self.sort_key);
        self.paginator.sync(&ordered);

        let page_items = self
            .paginator
            .current_items(&ordered)
            .iter()
            .map(|item| (*item).clone())
            .collect();

        BrowsePage {
            items: page_items,
            info: self.paginator.page_info(),
            window: self.paginator.page_window(),
            matched: ordered.len(),
        }
    }
}
