mod fixtures;

use catalog_common::pagination::*;
use catalog_common::PipelineError;

use PageMarker::{Ellipsis, Page};

fn synced(n: usize, page_size: usize) -> (Vec<catalog_common::types::CatalogItem>, Paginator) {
    let items = fixtures::numbered(n);
    let mut paginator = Paginator::new(page_size).unwrap();
    paginator.sync(&items);
    (items, paginator)
}

// ============================================================================
// Page arithmetic
// ============================================================================

#[test]
fn twenty_five_items_in_pages_of_ten() {
    let (items, mut p) = synced(25, 10);
    assert_eq!(p.total_pages(), 3);
    assert_eq!(p.total_items(), 25);
    assert_eq!(p.current_page(), 1);

    assert_eq!(p.current_items(&items).len(), 10);
    assert!(p.has_next_page());
    assert!(!p.has_prev_page());

    p.next_page();
    assert_eq!(p.current_items(&items).len(), 10);
    assert!(p.has_next_page());
    assert!(p.has_prev_page());

    p.next_page();
    assert_eq!(p.current_page(), 3);
    assert_eq!(p.current_items(&items).len(), 5);
    assert_eq!(p.current_items(&items)[0].name, "Item 20");
    assert!(!p.has_next_page());
    assert!(p.has_prev_page());
}

#[test]
fn custom_page_size() {
    let (items, p) = synced(25, 5);
    assert_eq!(p.total_pages(), 5);
    assert_eq!(p.current_items(&items).len(), 5);
}

#[test]
fn empty_list_has_no_pages() {
    let (items, mut p) = synced(0, 10);
    assert_eq!(p.total_pages(), 0);
    assert_eq!(p.current_page(), 1);
    assert!(p.current_items(&items).is_empty());
    assert!(!p.has_next_page());
    assert!(!p.has_prev_page());

    p.go_to_page(4);
    assert_eq!(p.current_page(), 1);
    assert!(p.page_window().is_empty());
}

#[test]
fn page_info_snapshot() {
    let (_, mut p) = synced(25, 10);
    p.go_to_page(2);
    assert_eq!(
        p.page_info(),
        PageInfo {
            current_page: 2,
            total_pages: 3,
            total_items: 25,
            page_size: 10,
            has_next_page: true,
            has_prev_page: true,
        }
    );
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn go_to_page_clamps_out_of_range() {
    let (_, mut p) = synced(25, 10);
    p.go_to_page(2);
    assert_eq!(p.current_page(), 2);
    p.go_to_page(3 + 5);
    assert_eq!(p.current_page(), 3);
    p.go_to_page(-3);
    assert_eq!(p.current_page(), 1);
    p.go_to_page(0);
    assert_eq!(p.current_page(), 1);
}

#[test]
fn next_and_prev_do_not_wrap() {
    let (_, mut p) = synced(25, 10);
    p.prev_page();
    assert_eq!(p.current_page(), 1);
    p.go_to_page(3);
    p.next_page();
    assert_eq!(p.current_page(), 3);
    p.prev_page();
    assert_eq!(p.current_page(), 2);
}

// ============================================================================
// Reset and clamp rules
// ============================================================================

#[test]
fn new_list_resets_to_first_page() {
    let (_, mut p) = synced(25, 10);
    p.go_to_page(2);
    let more = fixtures::numbered(35);
    p.sync(&more);
    assert_eq!(p.current_page(), 1);
    assert_eq!(p.total_pages(), 4);
}

#[test]
fn shrinking_list_resets_and_recounts() {
    let (_, mut p) = synced(25, 10);
    p.go_to_page(3);
    let fewer = fixtures::numbered(15);
    p.sync(&fewer);
    assert_eq!(p.current_page(), 1);
    assert_eq!(p.total_pages(), 2);
}

#[test]
fn resync_with_same_list_keeps_page() {
    let (items, mut p) = synced(25, 10);
    p.go_to_page(3);
    p.sync(&items);
    assert_eq!(p.current_page(), 3);
    let copy = items.clone();
    p.sync(&copy);
    assert_eq!(p.current_page(), 3);
}

#[test]
fn reordering_counts_as_identity_change() {
    let (mut items, mut p) = synced(25, 10);
    p.go_to_page(2);
    items.reverse();
    p.sync(&items);
    assert_eq!(p.current_page(), 1);
}

#[test]
fn clamp_only_policy_keeps_page_when_valid() {
    let items = fixtures::numbered(25);
    let mut p = Paginator::with_policy(10, ResetPolicy::ClampOnly).unwrap();
    p.sync(&items);
    p.go_to_page(2);

    let more = fixtures::numbered(40);
    p.sync(&more);
    assert_eq!(p.current_page(), 2);
}

#[test]
fn clamp_only_policy_clamps_when_pages_shrink() {
    let items = fixtures::numbered(25);
    let mut p = Paginator::with_policy(10, ResetPolicy::ClampOnly).unwrap();
    p.sync(&items);
    p.go_to_page(3);

    let fewer = fixtures::numbered(15);
    p.sync(&fewer);
    assert_eq!(p.current_page(), 2);

    p.sync(&fixtures::numbered(0));
    assert_eq!(p.current_page(), 1);
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn zero_page_size_is_rejected() {
    assert_eq!(
        Paginator::new(0),
        Err(PipelineError::InvalidPageSize { size: 0 })
    );
}

#[test]
fn negative_signed_page_size_is_rejected() {
    assert_eq!(
        Paginator::from_signed(-4),
        Err(PipelineError::InvalidPageSize { size: -4 })
    );
    assert!(Paginator::from_signed(0).is_err());
    assert_eq!(Paginator::from_signed(12).unwrap().page_size(), 12);
}

// ============================================================================
// Page window
// ============================================================================

#[test]
fn window_lists_every_page_up_to_seven() {
    assert_eq!(
        page_window(1, 5),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
    );
    assert_eq!(page_window(4, 7).len(), 7);
    assert!(!page_window(7, 7).contains(&Ellipsis));
}

#[test]
fn window_near_start() {
    assert_eq!(
        page_window(3, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
    );
    assert_eq!(
        page_window(1, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
    );
}

#[test]
fn window_near_end() {
    assert_eq!(
        page_window(8, 10),
        vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
    );
    assert_eq!(
        page_window(10, 10),
        vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn window_in_the_middle_has_two_ellipses() {
    let window = page_window(5, 10);
    assert_eq!(
        window,
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
    assert_eq!(window.iter().filter(|m| **m == Ellipsis).count(), 2);
}

#[test]
fn window_never_exceeds_two_ellipses() {
    for total in 0..40 {
        for current in 1..=total.max(1) {
            let window = page_window(current, total);
            let ellipses = window.iter().filter(|m| **m == Ellipsis).count();
            assert!(ellipses <= 2, "{current}/{total}: {window:?}");
            if total > 0 {
                assert!(window.contains(&Page(current)), "{current}/{total}: {window:?}");
                assert_eq!(window.first(), Some(&Page(1)));
                assert_eq!(window.last(), Some(&Page(total)));
            }
        }
    }
}

#[test]
fn controls_hidden_for_single_page() {
    assert!(!should_display(0));
    assert!(!should_display(1));
    assert!(should_display(2));
}
