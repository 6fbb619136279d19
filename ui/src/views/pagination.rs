#![allow(non_snake_case)]

use catalog_common::pagination::{should_display, PageMarker};
use dioxus::prelude::*;

use crate::catalog::Board;

#[component]
pub fn Pagination(board: Board) -> Element {
    let page = board.page();
    let info = page.info;

    if !should_display(info.total_pages) {
        return rsx! {};
    }

    let first = (info.current_page - 1) * info.page_size + 1;
    let last = (info.current_page * info.page_size).min(info.total_items);

    rsx! {
        nav { class: "pagination", aria_label: "Pagination",
            button {
                class: "page-btn",
                disabled: !info.has_prev_page,
                onclick: move |_| board.prev_page(),
                "Previous"
            }

            for (idx, marker) in page.window.into_iter().enumerate() {
                {page_marker(board, idx, marker, info.current_page)}
            }

            button {
                class: "page-btn",
                disabled: !info.has_next_page,
                onclick: move |_| board.next_page(),
                "Next"
            }

            span { class: "page-summary",
                "{first}-{last} of {info.total_items}"
            }
        }
    }
}

fn page_marker(board: Board, idx: usize, marker: PageMarker, current: usize) -> Element {
    match marker {
        PageMarker::Page(n) => {
            let is_current = n == current;
            rsx! {
                button {
                    key: "{idx}",
                    class: if is_current { "page-btn current" } else { "page-btn" },
                    aria_current: aria_current(is_current),
                    onclick: move |_| board.go_to_page(n),
                    "{n}"
                }
            }
        }
        PageMarker::Ellipsis => rsx! {
            span { key: "{idx}", class: "page-ellipsis", "..." }
        },
    }
}

/// `aria-current` value for a page button; absent on every page but the current one.
fn aria_current(is_current: bool) -> Option<&'static str> {
    is_current.then_some("page")
}
