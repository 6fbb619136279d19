use catalog_common::types::Blueprint;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "printlab_blueprints";

/// Bump this when the Blueprint schema changes to auto-clear stale caches.
const CACHE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct CacheData {
    #[serde(default)]
    version: u32,
    blueprints: Vec<Blueprint>,
}

/// Blueprints saved by a previous session, if any.
pub fn load_cache() -> Option<Vec<Blueprint>> {
    let storage = get_storage()?;
    let json = storage.get_item(STORAGE_KEY).ok().flatten()?;
    let data: CacheData = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(_) => {
            let _ = storage.remove_item(STORAGE_KEY);
            return None;
        }
    };
    if data.version != CACHE_VERSION {
        tracing::info!(
            "Cache version mismatch ({} != {}), clearing",
            data.version,
            CACHE_VERSION
        );
        let _ = storage.remove_item(STORAGE_KEY);
        return None;
    }
    tracing::info!("Loaded {} cached blueprints", data.blueprints.len());
    Some(data.blueprints)
}

pub fn save_cache(blueprints: &[Blueprint]) {
    let Some(storage) = get_storage() else {
        return;
    };
    let data = CacheData {
        version: CACHE_VERSION,
        blueprints: blueprints.to_vec(),
    };
    if let Ok(json) = serde_json::to_string(&data) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}

pub fn clear_cache() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
    tracing::info!("Cache cleared");
}

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
