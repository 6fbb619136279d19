//! Fixed-size page slicing with boundary clamping and page-window display logic.
//!
//! The [`Paginator`] keeps only the current page, the page size and a
//! fingerprint of the last list it was synced against. Call [`Paginator::sync`]
//! on every recompute; it applies the reset rule (new list identity goes back to
//! page 1) and then the clamp rule (current page never exceeds the page count).

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::fingerprint::list_fingerprint;
use crate::types::{CatalogItem, ItemId};

/// Page count at or below which every page number is shown.
pub const FULL_WINDOW_MAX_PAGES: usize = 7;

/// Anything the paginator can fingerprint by identity.
pub trait Keyed {
    fn item_id(&self) -> &ItemId;
}

impl Keyed for CatalogItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}

impl Keyed for ItemId {
    fn item_id(&self) -> &ItemId {
        self
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn item_id(&self) -> &ItemId {
        (**self).item_id()
    }
}

/// What happens to the current page when the synced list changes identity.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Go back to page 1 whenever the list length or identity changes.
    #[default]
    ResetOnChange,
    /// Keep the current page and only clamp it into range.
    ClampOnly,
}

/// One slot of the page-number strip.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Snapshot of pagination metadata for rendering controls.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
    total_items: usize,
    fingerprint: Option<[u8; 32]>,
    policy: ResetPolicy,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self> {
        Self::with_policy(page_size, ResetPolicy::default())
    }

    pub fn with_policy(page_size: usize, policy: ResetPolicy) -> Result<Self> {
        let size =
            NonZeroUsize::new(page_size).ok_or(PipelineError::InvalidPageSize { size: 0 })?;
        Ok(Self::sized(size, policy))
    }

    /// Infallible constructor for page sizes known at compile time.
    pub fn sized(page_size: NonZeroUsize, policy: ResetPolicy) -> Self {
        Self {
            page_size: page_size.get(),
            current_page: 1,
            total_items: 0,
            fingerprint: None,
            policy,
        }
    }

    /// Constructor for callers holding a signed size (form input, config files).
    pub fn from_signed(page_size: i64) -> Result<Self> {
        match usize::try_from(page_size) {
            Ok(size) if size > 0 => Self::new(size),
            _ => Err(PipelineError::InvalidPageSize { size: page_size }),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn policy(&self) -> ResetPolicy {
        self.policy
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// ceil(total_items / page_size); 0 for an empty list.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Recompute against the latest list.
    pub fn sync<T: Keyed>(&mut self, items: &[T]) {
        let fingerprint = list_fingerprint(items.iter().map(|item| item.item_id()));
        let changed = self.fingerprint != Some(fingerprint);
        self.fingerprint = Some(fingerprint);
        self.total_items = items.len();

        if changed && self.policy == ResetPolicy::ResetOnChange && self.current_page != 1 {
            tracing::debug!(
                from = self.current_page,
                total_items = self.total_items,
                "item list changed, resetting to page 1"
            );
            self.current_page = 1;
        }
        self.clamp_current_page();
    }

    /// Move to page `n`, clamped into `[1, total_pages]` (page 1 when there are no pages).
    pub fn go_to_page(&mut self, n: i64) {
        let last = self.total_pages().max(1) as i64;
        self.current_page = n.clamp(1, last) as usize;
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.has_prev_page() {
            self.current_page -= 1;
        }
    }

    /// Index range of the current page within the synced list.
    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Slice of `items` on the current page. `items` should be the list last synced.
    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_items: self.total_items,
            page_size: self.page_size,
            has_next_page: self.has_next_page(),
            has_prev_page: self.has_prev_page(),
        }
    }

    pub fn page_window(&self) -> Vec<PageMarker> {
        page_window(self.current_page, self.total_pages())
    }

    fn clamp_current_page(&mut self) {
        let last = self.total_pages().max(1);
        if self.current_page > last {
            tracing::debug!(
                from = self.current_page,
                to = last,
                "current page out of range, clamping"
            );
            self.current_page = last;
        }
    }
}

/// Pagination controls are hidden when everything fits on one page.
pub fn should_display(total_pages: usize) -> bool {
    total_pages > 1
}

/// Page-number strip for `current` of `total` pages.
///
/// Up to 7 pages are listed in full. Beyond that: page 1, an ellipsis when
/// `current > 3`, a window around `current`, an ellipsis when
/// `current < total - 2`, then the last page.
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    if total == 0 {
        return Vec::new();
    }
    if total <= FULL_WINDOW_MAX_PAGES {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current <= 3 {
        end = 5.min(total - 1);
    }
    if current >= total - 2 {
        start = (total - 4).max(2);
    }

    let mut window = Vec::with_capacity(9);
    window.push(PageMarker::Page(1));
    if current > 3 {
        window.push(PageMarker::Ellipsis);
    }
    window.extend((start..=end).map(PageMarker::Page));
    if current < total - 2 {
        window.push(PageMarker::Ellipsis);
    }
    window.push(PageMarker::Page(total));
    window
}
