pub mod gallery;
pub mod http;
pub mod printify;
pub mod session;
pub mod types;

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::prelude::*;

use crate::state::SESSION;
use types::StaticToken;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Token of the current session, captured at call time.
pub fn session_credentials() -> StaticToken {
    StaticToken(SESSION.read().token.clone())
}

pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    session::restore_session();

    // Show cached blueprints while the fresh list loads.
    if let Some(blueprints) = crate::catalog::cache::load_cache() {
        crate::catalog::set_blueprints(blueprints);
    }

    printify::load_blueprints();
    if SESSION.read().user_id.is_some() {
        gallery::load_gallery();
    }
}
