#![allow(non_snake_case)]

use catalog_common::sort::SortKey;
use dioxus::prelude::*;

use super::plural;
use crate::catalog::Board;

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::ByName => "Name (A-Z)",
        SortKey::ByCategory => "Brand / status",
        SortKey::ByRecency => "Most recent",
    }
}

#[component]
pub fn FilterBar(board: Board) -> Element {
    let mut show_advanced = use_signal(|| false);

    let state = board.state();
    let page = board.page();
    let counts = board.category_counts();
    let query = state.filter.search_query.clone();
    let category = state.filter.category_filter.clone();
    let active = state.filter.active_filter_count();
    let matched = page.matched;
    let noun = board.noun();
    let s = plural(matched);
    let label = board.category_label();

    rsx! {
        div { class: "search-section",
            div { class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search by name, brand, model...",
                    value: "{query}",
                    oninput: move |e| board.set_query(e.value()),
                }
                if !query.is_empty() {
                    button {
                        class: "search-clear",
                        onclick: move |_| board.set_query(String::new()),
                        "\u{00d7}"
                    }
                }
                button {
                    class: "filters-toggle",
                    onclick: move |_| {
                        let open = *show_advanced.read();
                        show_advanced.set(!open);
                    },
                    if active > 0 { "Filters ({active})" } else { "Filters" }
                }
            }

            if *show_advanced.read() {
                div { class: "advanced-filters",
                    label { "{label}" }
                    select {
                        value: "{category}",
                        onchange: move |e| board.set_category(e.value()),
                        option { value: "", "All" }
                        for count in counts {
                            option {
                                key: "{count.category}",
                                value: "{count.category}",
                                selected: count.category == category,
                                "{count.category} ({count.count})"
                            }
                        }
                    }

                    label { "Sort by" }
                    select {
                        value: "{state.sort_key}",
                        onchange: move |e| {
                            match e.value().parse::<SortKey>() {
                                Ok(key) => board.set_sort_key(key),
                                Err(err) => tracing::warn!("{}", err),
                            }
                        },
                        for sort_key in SortKey::ALL {
                            option {
                                key: "{sort_key}",
                                value: "{sort_key}",
                                selected: sort_key == state.sort_key,
                                "{sort_label(sort_key)}"
                            }
                        }
                    }
                }
            }

            if state.filter.has_active_filters() {
                div { class: "active-filters",
                    if !query.is_empty() {
                        span { class: "filter-tag",
                            "Search: {query}"
                            button {
                                onclick: move |_| board.set_query(String::new()),
                                "\u{00d7}"
                            }
                        }
                    }
                    if !category.is_empty() {
                        span { class: "filter-tag",
                            "{label}: {category}"
                            button {
                                onclick: move |_| board.set_category(String::new()),
                                "\u{00d7}"
                            }
                        }
                    }
                    button {
                        class: "clear-filters",
                        onclick: move |_| board.clear_filters(),
                        "Clear all"
                    }
                }
            }

            div { class: "filter-row",
                span { class: "result-count", "{matched} {noun}{s} found" }
            }
        }
    }
}
