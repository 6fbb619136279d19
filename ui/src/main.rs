#![allow(non_snake_case)]

use dioxus::prelude::*;

mod api;
mod catalog;
mod state;
mod views;

use catalog::Board;
use state::{Tab, ACTIVE_TAB, SESSION};
use views::gallery::Gallery;
use views::product_grid::ProductGrid;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        api::init();
    });

    let tab = *ACTIVE_TAB.read();
    let signed_in = SESSION.read().user_id.is_some();

    let tab_class = |t: Tab| if t == tab { "tab active" } else { "tab" };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "Printlab" }

                nav { class: "tabs",
                    button {
                        class: tab_class(Tab::Catalog),
                        onclick: move |_| {
                            *ACTIVE_TAB.write() = Tab::Catalog;
                        },
                        "Products"
                    }
                    button {
                        class: tab_class(Tab::Gallery),
                        onclick: move |_| {
                            *ACTIVE_TAB.write() = Tab::Gallery;
                            Board::Gallery.refresh();
                        },
                        "My images"
                    }
                }

                div { class: "header-controls",
                    button {
                        class: "clear-cache-btn",
                        title: "Clear cached products and reload",
                        onclick: move |_| {
                            catalog::cache::clear_cache();
                            api::printify::load_blueprints();
                        },
                        "Reload"
                    }
                    if signed_in {
                        button {
                            class: "sign-out-btn",
                            onclick: move |_| api::session::sign_out(),
                            "Sign out"
                        }
                    } else {
                        span { class: "session-status", "Signed out" }
                    }
                }
            }

            {
                match tab {
                    Tab::Catalog => rsx! { ProductGrid {} },
                    Tab::Gallery => rsx! { Gallery {} },
                }
            }
        }
    }
}
