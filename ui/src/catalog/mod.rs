pub mod cache;

use catalog_common::browse::{BrowsePage, BrowseState};
use catalog_common::filter::{category_counts, CategoryCount};
use catalog_common::sort::SortKey;
use catalog_common::types::{Blueprint, CatalogItem, SavedImage};
use dioxus::prelude::*;

use crate::state::{
    BLUEPRINTS, CATALOG_PAGE, CATALOG_VIEW, GALLERY_PAGE, GALLERY_VIEW, SAVED_IMAGES,
};

/// A browsable list: the blueprint catalog or the saved-image gallery.
///
/// Every mutation goes through here and is followed by a recompute, so the
/// rendered page signal is never written during render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Board {
    Catalog,
    Gallery,
}

impl Board {
    fn view(self) -> &'static GlobalSignal<BrowseState> {
        match self {
            Board::Catalog => &CATALOG_VIEW,
            Board::Gallery => &GALLERY_VIEW,
        }
    }

    fn page_signal(self) -> &'static GlobalSignal<BrowsePage> {
        match self {
            Board::Catalog => &CATALOG_PAGE,
            Board::Gallery => &GALLERY_PAGE,
        }
    }

    /// Current source list, normalized for the pipeline.
    pub fn items(self) -> Vec<CatalogItem> {
        match self {
            Board::Catalog => BLUEPRINTS.read().iter().map(CatalogItem::from).collect(),
            Board::Gallery => SAVED_IMAGES.read().iter().map(CatalogItem::from).collect(),
        }
    }

    pub fn page(self) -> BrowsePage {
        self.page_signal().read().clone()
    }

    pub fn state(self) -> BrowseState {
        self.view().read().clone()
    }

    pub fn category_counts(self) -> Vec<CategoryCount> {
        category_counts(&self.items())
    }

    pub fn category_label(self) -> &'static str {
        match self {
            Board::Catalog => "Brand",
            Board::Gallery => "Status",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Board::Catalog => "product",
            Board::Gallery => "image",
        }
    }

    pub fn refresh(self) {
        let items = self.items();
        let page = self.view().write().recompute(&items);
        tracing::debug!(
            "{:?}: {} matched, page {}/{}",
            self,
            page.matched,
            page.info.current_page,
            page.info.total_pages
        );
        *self.page_signal().write() = page;
    }

    fn update(self, change: impl FnOnce(&mut BrowseState)) {
        change(&mut self.view().write());
        self.refresh();
    }

    pub fn set_query(self, query: String) {
        self.update(|state| state.set_query(query));
    }

    pub fn set_category(self, category: String) {
        self.update(|state| state.set_category(category));
    }

    pub fn set_sort_key(self, key: SortKey) {
        self.update(|state| state.set_sort_key(key));
    }

    pub fn clear_filters(self) {
        self.update(BrowseState::clear_filters);
    }

    pub fn go_to_page(self, page: usize) {
        let page = i64::try_from(page).unwrap_or(i64::MAX);
        self.update(|state| state.paginator.go_to_page(page));
    }

    pub fn next_page(self) {
        self.update(|state| state.paginator.next_page());
    }

    pub fn prev_page(self) {
        self.update(|state| state.paginator.prev_page());
    }
}

/// Replace the blueprint list and recompute the catalog page.
pub fn set_blueprints(blueprints: Vec<Blueprint>) {
    *BLUEPRINTS.write() = blueprints;
    Board::Catalog.refresh();
}

/// Replace the saved images and recompute the gallery page.
pub fn set_saved_images(images: Vec<SavedImage>) {
    *SAVED_IMAGES.write() = images;
    Board::Gallery.refresh();
}
