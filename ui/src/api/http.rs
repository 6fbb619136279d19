use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::types::{ApiError, CredentialProvider};

/// GET `url` and decode the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    credentials: &dyn CredentialProvider,
) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(network)?;
    if let Some(token) = credentials.bearer_token() {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(network)?;
    }

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let resp: Response = resp_value.dyn_into().map_err(network)?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?;
    let body = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("response not string".to_string()))?;

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
