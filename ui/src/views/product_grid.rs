#![allow(non_snake_case)]

use catalog_common::types::{CatalogItem, ItemId};
use dioxus::prelude::*;

use super::filter_bar::FilterBar;
use super::pagination::Pagination;
use super::truncate;
use crate::catalog::Board;
use crate::state::{LoadState, BLUEPRINTS, BLUEPRINTS_STATE};

#[component]
pub fn ProductGrid() -> Element {
    let load_state = BLUEPRINTS_STATE.read().clone();
    let page = Board::Catalog.page();
    let has_blueprints = !BLUEPRINTS.read().is_empty();

    rsx! {
        section { class: "catalog",
            FilterBar { board: Board::Catalog }

            {
                match load_state {
                    LoadState::Loading if !has_blueprints => rsx! {
                        div { class: "empty-state", p { "Loading products..." } }
                    },
                    LoadState::Failed(err) if !has_blueprints => rsx! {
                        div { class: "empty-state error",
                            p { "Could not load products: {err}" }
                            button {
                                onclick: move |_| crate::api::printify::load_blueprints(),
                                "Retry"
                            }
                        }
                    },
                    _ if page.items.is_empty() && has_blueprints => rsx! {
                        div { class: "empty-state",
                            p { "No product matches these filters." }
                            button {
                                onclick: move |_| Board::Catalog.clear_filters(),
                                "Clear filters"
                            }
                        }
                    },
                    _ => rsx! {
                        div { class: "product-grid",
                            for item in page.items.iter() {
                                ProductCard { key: "{item.id}", item: item.clone() }
                            }
                        }
                    },
                }
            }

            Pagination { board: Board::Catalog }
        }
    }
}

#[component]
fn ProductCard(item: CatalogItem) -> Element {
    let image = match &item.id {
        ItemId::Numeric(id) => BLUEPRINTS
            .read()
            .iter()
            .find(|bp| bp.id == *id)
            .and_then(|bp| bp.images.first().cloned()),
        ItemId::Text(_) => None,
    };
    let description = truncate(&item.description, 120);

    rsx! {
        div { class: "product-card",
            if let Some(src) = image {
                img { class: "product-image", src: "{src}", alt: "{item.name}" }
            } else {
                div { class: "product-image placeholder" }
            }
            div { class: "product-card-body",
                h3 { class: "product-title", "{item.name}" }
                div { class: "product-meta",
                    span { class: "product-brand", "{item.brand}" }
                    if !item.model.is_empty() {
                        span { class: "product-model", "{item.model}" }
                    }
                }
                if !description.is_empty() {
                    p { class: "product-description", "{description}" }
                }
            }
        }
    }
}
