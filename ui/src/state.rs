#![allow(non_snake_case)]

use std::num::NonZeroUsize;

use catalog_common::browse::{BrowsePage, BrowseState};
use catalog_common::pagination::ResetPolicy;
use catalog_common::sort::SortKey;
use catalog_common::types::{Blueprint, SavedImage};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api::types::ServiceConfig;

// --- Data types ---

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Signed-in user as handed over by the auth provider.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Catalog,
    Gallery,
}

pub const BLUEPRINT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => unreachable!(),
};

pub const GALLERY_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(9) {
    Some(size) => size,
    None => unreachable!(),
};

fn catalog_browse() -> BrowseState {
    BrowseState::sized(BLUEPRINT_PAGE_SIZE, ResetPolicy::ResetOnChange, SortKey::ByName)
}

fn gallery_browse() -> BrowseState {
    BrowseState::sized(GALLERY_PAGE_SIZE, ResetPolicy::ResetOnChange, SortKey::ByRecency)
}

// --- Global signals ---

/// Endpoints of the backend and fulfillment services
pub static SERVICE_CONFIG: GlobalSignal<ServiceConfig> = Global::new(ServiceConfig::default);

pub static SESSION: GlobalSignal<Session> = Global::new(Session::default);

pub static ACTIVE_TAB: GlobalSignal<Tab> = Global::new(Tab::default);

/// Blueprints as returned by the fulfillment service
pub static BLUEPRINTS: GlobalSignal<Vec<Blueprint>> = Global::new(Vec::new);

pub static BLUEPRINTS_STATE: GlobalSignal<LoadState> = Global::new(LoadState::default);

/// The signed-in user's saved images
pub static SAVED_IMAGES: GlobalSignal<Vec<SavedImage>> = Global::new(Vec::new);

pub static GALLERY_STATE: GlobalSignal<LoadState> = Global::new(LoadState::default);

/// Query, sort key and page of the blueprint catalog
pub static CATALOG_VIEW: GlobalSignal<BrowseState> = Global::new(catalog_browse);

/// Last computed catalog page
pub static CATALOG_PAGE: GlobalSignal<BrowsePage> = Global::new(|| catalog_browse().recompute(&[]));

/// Query, sort key and page of the image gallery
pub static GALLERY_VIEW: GlobalSignal<BrowseState> = Global::new(gallery_browse);

/// Last computed gallery page
pub static GALLERY_PAGE: GlobalSignal<BrowsePage> = Global::new(|| gallery_browse().recompute(&[]));
