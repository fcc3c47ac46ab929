use lab_site_core::{Section, SiteError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::dom::describe;

/// Fetches and decodes a section's JSON document from the site origin.
pub async fn fetch_document<S: Section>() -> Result<S::Document, SiteError> {
    let path = S::RESOURCE.path();
    let window = web_sys::window().ok_or_else(|| SiteError::fetch(path, "no window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(path, &opts)
        .map_err(|e| SiteError::fetch(path, describe(&e)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SiteError::fetch(path, describe(&e)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| SiteError::fetch(path, "fetch did not resolve to a Response"))?;

    if !response.ok() {
        return Err(SiteError::Status {
            resource: path.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .json()
        .map_err(|e| SiteError::decode(path, describe(&e)))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| SiteError::decode(path, describe(&e)))?;

    serde_wasm_bindgen::from_value::<S::Document>(json).map_err(|e| SiteError::decode(path, e))
}
