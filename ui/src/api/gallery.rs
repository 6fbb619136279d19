use catalog_common::types::{ImageListResponse, SavedImage};
use dioxus::prelude::*;

use super::http::get_json;
use super::session_credentials;
use super::types::{ApiError, CredentialProvider, ServiceConfig};
use crate::catalog;
use crate::state::{LoadState, GALLERY_STATE, SERVICE_CONFIG, SESSION};

pub async fn fetch_user_images(
    config: &ServiceConfig,
    credentials: &dyn CredentialProvider,
    user_id: &str,
) -> Result<Vec<SavedImage>, ApiError> {
    let resp: ImageListResponse = get_json(&config.user_images_url(user_id), credentials).await?;
    if !resp.success {
        return Err(ApiError::Rejected(
            resp.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(resp.data.map(|page| page.images).unwrap_or_default())
}

/// Fetch the signed-in user's saved images in the background.
pub fn load_gallery() {
    let Some(user_id) = SESSION.read().user_id.clone() else {
        *GALLERY_STATE.write() = LoadState::Failed(ApiError::NoSession.to_string());
        return;
    };
    *GALLERY_STATE.write() = LoadState::Loading;
    wasm_bindgen_futures::spawn_local(async move {
        let config = SERVICE_CONFIG.read().clone();
        let credentials = session_credentials();
        match fetch_user_images(&config, &credentials, &user_id).await {
            Ok(images) => {
                tracing::info!("Fetched {} saved images", images.len());
                catalog::set_saved_images(images);
                *GALLERY_STATE.write() = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!("Gallery fetch failed: {}", e);
                *GALLERY_STATE.write() = LoadState::Failed(e.to_string());
            }
        }
    });
}
