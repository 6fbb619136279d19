use dioxus::prelude::*;

use super::types::ApiError;
use crate::state::{LoadState, Session, GALLERY_STATE, SESSION};

const STORAGE_KEY: &str = "printlab_session";

/// Build a session from the sign-in redirect parameters (`user_id`, `token`).
/// A blank user id means no session.
pub fn session_from_params(get: impl Fn(&str) -> Option<String>) -> Option<Session> {
    let user_id = get("user_id")
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())?;
    let token = get("token")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    Some(Session {
        user_id: Some(user_id),
        token,
    })
}

/// Stored sessions without a user id are discarded.
pub fn decode_stored(json: &str) -> Option<Session> {
    serde_json::from_str::<Session>(json)
        .ok()
        .filter(|s| s.user_id.as_deref().is_some_and(|id| !id.is_empty()))
}

/// Populate [`SESSION`] from the sign-in redirect, falling back to the one
/// persisted by a previous visit.
pub fn restore_session() {
    if let Some(session) = session_from_url() {
        tracing::info!("Signed in from redirect");
        save(&session);
        *SESSION.write() = session;
        return;
    }
    let stored = get_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|json| decode_stored(&json));
    match stored {
        Some(session) => {
            tracing::debug!("Restored stored session");
            *SESSION.write() = session;
        }
        None => tracing::debug!("No session"),
    }
}

pub fn sign_out() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
    *SESSION.write() = Session::default();
    crate::catalog::set_saved_images(Vec::new());
    *GALLERY_STATE.write() = LoadState::Failed(ApiError::NoSession.to_string());
    tracing::info!("Signed out");
}

fn session_from_url() -> Option<Session> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    session_from_params(|key| params.get(key))
}

fn save(session: &Session) {
    let Some(storage) = get_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(session) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
