mod fixtures;

use std::num::NonZeroUsize;

use catalog_common::browse::BrowseState;
use catalog_common::pagination::{PageMarker, ResetPolicy};
use catalog_common::sort::SortKey;

#[test]
fn recompute_runs_filter_sort_and_page() {
    let items = fixtures::apparel();
    let mut state = BrowseState::new(10).unwrap();
    state.set_query("nike");
    state.set_sort_key(SortKey::ByName);

    let page = state.recompute(&items);
    let names: Vec<_> = page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Mug Premium", "T-shirt Classic"]);
    assert_eq!(page.matched, 2);
    assert_eq!(page.info.total_pages, 1);
    assert_eq!(page.window, vec![PageMarker::Page(1)]);
}

#[test]
fn filter_change_returns_to_first_page() {
    let items = fixtures::numbered(40);
    let mut state = BrowseState::new(10).unwrap();
    state.recompute(&items);
    state.paginator.go_to_page(4);
    assert_eq!(state.recompute(&items).info.current_page, 4);

    state.set_query("item 1");
    let page = state.recompute(&items);
    assert_eq!(page.info.current_page, 1);
    // "Item 1" and "Item 10".."Item 19"
    assert_eq!(page.matched, 11);
    assert_eq!(page.info.total_pages, 2);
}

#[test]
fn navigation_without_changes_keeps_page() {
    let items = fixtures::numbered(25);
    let mut state = BrowseState::new(10).unwrap();
    state.set_sort_key(SortKey::ByRecency);
    state.recompute(&items);
    state.paginator.next_page();

    let page = state.recompute(&items);
    assert_eq!(page.info.current_page, 2);
    assert_eq!(page.items.first().map(|i| i.created_at), Some(14));
}

#[test]
fn clear_filters_restores_name_order() {
    let mut state = BrowseState::new(5).unwrap();
    state.set_query("mug");
    state.set_category("Nike");
    state.set_sort_key(SortKey::ByRecency);

    state.clear_filters();
    assert!(!state.filter.has_active_filters());
    assert_eq!(state.sort_key, SortKey::ByName);
    assert_eq!(state.recompute(&fixtures::apparel()).matched, 3);
}

#[test]
fn clamp_only_state_survives_filter_growth() {
    let items = fixtures::numbered(30);
    let mut state = BrowseState::with_policy(10, ResetPolicy::ClampOnly).unwrap();
    state.set_query("item 2");
    state.recompute(&items);
    state.paginator.go_to_page(2);

    state.set_query("");
    let page = state.recompute(&items);
    assert_eq!(page.info.current_page, 2);
}

#[test]
fn empty_catalog_renders_empty_page() {
    let mut state = BrowseState::new(12).unwrap();
    let page = state.recompute(&[]);
    assert!(page.items.is_empty());
    assert_eq!(page.info.total_pages, 0);
    assert!(page.window.is_empty());
}

#[test]
fn invalid_page_size_is_reported() {
    assert!(BrowseState::new(0).is_err());
}

#[test]
fn sized_state_starts_with_given_sort() {
    let size = NonZeroUsize::new(2).unwrap();
    let mut state = BrowseState::sized(size, ResetPolicy::ClampOnly, SortKey::ByRecency);
    assert_eq!(state.sort_key, SortKey::ByRecency);
    assert_eq!(state.paginator.policy(), ResetPolicy::ClampOnly);
    let page = state.recompute(&[]);
    assert_eq!(page.info.page_size, 2);
    assert_eq!(page.info.current_page, 1);
}
