use catalog_common::types::{Blueprint, BlueprintList};
use dioxus::prelude::*;

use super::http::get_json;
use super::session_credentials;
use super::types::{ApiError, CredentialProvider, ServiceConfig};
use crate::catalog::{self, cache};
use crate::state::{LoadState, BLUEPRINTS_STATE, SERVICE_CONFIG};

pub async fn fetch_blueprints(
    config: &ServiceConfig,
    credentials: &dyn CredentialProvider,
) -> Result<Vec<Blueprint>, ApiError> {
    let list: BlueprintList = get_json(&config.blueprints_url(), credentials).await?;
    Ok(list.data)
}

/// Fetch blueprints in the background and feed them to the catalog.
pub fn load_blueprints() {
    *BLUEPRINTS_STATE.write() = LoadState::Loading;
    wasm_bindgen_futures::spawn_local(async move {
        let config = SERVICE_CONFIG.read().clone();
        let credentials = session_credentials();
        match fetch_blueprints(&config, &credentials).await {
            Ok(blueprints) => {
                tracing::info!("Fetched {} blueprints", blueprints.len());
                cache::save_cache(&blueprints);
                catalog::set_blueprints(blueprints);
                *BLUEPRINTS_STATE.write() = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!("Blueprint fetch failed: {}", e);
                *BLUEPRINTS_STATE.write() = LoadState::Failed(e.to_string());
            }
        }
    });
}
