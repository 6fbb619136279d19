#![allow(non_snake_case)]

use catalog_common::types::{CatalogItem, ItemId};
use dioxus::prelude::*;

use super::filter_bar::FilterBar;
use super::pagination::Pagination;
use super::truncate;
use crate::catalog::Board;
use crate::state::{LoadState, GALLERY_STATE, SAVED_IMAGES};

#[component]
pub fn Gallery() -> Element {
    let load_state = GALLERY_STATE.read().clone();
    let page = Board::Gallery.page();
    let has_images = !SAVED_IMAGES.read().is_empty();

    rsx! {
        section { class: "gallery",
            FilterBar { board: Board::Gallery }

            {
                match load_state {
                    LoadState::Loading if !has_images => rsx! {
                        div { class: "empty-state", p { "Loading your images..." } }
                    },
                    LoadState::Failed(err) => rsx! {
                        div { class: "empty-state error",
                            p { "Could not load your images: {err}" }
                            button {
                                onclick: move |_| crate::api::gallery::load_gallery(),
                                "Retry"
                            }
                        }
                    },
                    _ if !has_images => rsx! {
                        div { class: "empty-state", p { "No saved images yet." } }
                    },
                    _ if page.items.is_empty() => rsx! {
                        div { class: "empty-state",
                            p { "No image matches these filters." }
                            button {
                                onclick: move |_| Board::Gallery.clear_filters(),
                                "Clear filters"
                            }
                        }
                    },
                    _ => rsx! {
                        div { class: "image-grid",
                            for item in page.items.iter() {
                                ImageCard { key: "{item.id}", item: item.clone() }
                            }
                        }
                    },
                }
            }

            Pagination { board: Board::Gallery }
        }
    }
}

#[component]
fn ImageCard(item: CatalogItem) -> Element {
    let url = match &item.id {
        ItemId::Text(id) => SAVED_IMAGES
            .read()
            .iter()
            .find(|img| img.image_id == *id)
            .map(|img| img.image_url.clone()),
        ItemId::Numeric(_) => None,
    };
    let prompt = truncate(&item.name, 80);

    rsx! {
        div { class: "image-card",
            if let Some(src) = url {
                img { src: "{src}", alt: "{item.name}", title: "{item.name}" }
            }
            p { class: "image-prompt", "{prompt}" }
            span { class: "image-status {item.category}", "{item.category}" }
        }
    }
}
