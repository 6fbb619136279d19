mod fixtures;

use catalog_common::filter::*;
use catalog_common::types::CatalogItem;

#[test]
fn search_is_case_insensitive_on_brand() {
    let items = fixtures::apparel();
    for query in ["nike", "NIKE", "NiKe"] {
        let result = filter(&items, query, "");
        assert_eq!(
            fixtures::names(&result),
            vec!["T-shirt Classic", "Mug Premium"],
            "query {query}"
        );
    }
}

#[test]
fn search_covers_model_and_description() {
    let mut items = fixtures::apparel();
    items[0].model = "5000".into();
    items[1].description = "Coton bio".into();

    assert_eq!(fixtures::names(&filter(&items, "500", "")), vec!["T-shirt Classic"]);
    assert_eq!(fixtures::names(&filter(&items, "BIO", "")), vec!["Casquette Sport"]);
    assert_eq!(fixtures::names(&filter(&items, "premium", "")), vec!["Mug Premium"]);
}

#[test]
fn empty_query_and_category_is_identity() {
    let items = fixtures::apparel();
    let result = filter(&items, "", "");
    let expected: Vec<&CatalogItem> = items.iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn category_is_exact_and_case_sensitive() {
    let items = fixtures::apparel();
    assert_eq!(filter(&items, "", "Nike").len(), 2);
    assert!(filter(&items, "", "nike").is_empty());
    assert!(filter(&items, "", "Nik").is_empty());
}

#[test]
fn query_and_category_combine_with_and() {
    let items = fixtures::apparel();
    let result = filter(&items, "mug", "Nike");
    assert_eq!(fixtures::names(&result), vec!["Mug Premium"]);
    assert!(filter(&items, "mug", "Adidas").is_empty());
}

#[test]
fn empty_input_and_no_match_return_empty() {
    assert!(filter(&[], "anything", "").is_empty());
    assert!(filter(&fixtures::apparel(), "zzz", "").is_empty());
}

#[test]
fn filter_state_tracks_active_filters() {
    let mut state = FilterState::default();
    assert!(!state.has_active_filters());
    assert_eq!(state.active_filter_count(), 0);

    state.search_query = "mug".into();
    assert!(state.has_active_filters());
    assert_eq!(state.active_filter_count(), 1);

    state.category_filter = "Nike".into();
    assert_eq!(state.active_filter_count(), 2);
    assert_eq!(state.apply(&fixtures::apparel()).len(), 1);

    state.clear();
    assert_eq!(state, FilterState::default());
}

#[test]
fn category_counts_are_sorted_with_totals() {
    let items = fixtures::apparel();
    let counts = category_counts(&items);
    assert_eq!(
        counts,
        vec![
            CategoryCount { category: "Adidas".into(), count: 1 },
            CategoryCount { category: "Nike".into(), count: 2 },
        ]
    );
}

#[test]
fn category_counts_skip_empty_category() {
    let mut items = fixtures::apparel();
    items[1].category.clear();
    let counts = category_counts(&items);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].category, "Nike");
}
