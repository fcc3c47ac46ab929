use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{self, describe};

const NEW_TAB_LINK: &str = r#"a[target="_blank"]"#;
const SAFE_REL: &str = "noopener noreferrer";

/// Adds `rel="noopener noreferrer"` to any new-tab link clicked without a
/// `rel` attribute.
pub fn wire(document: &Document) -> Result<(), JsValue> {
    dom::listen(document, "click", |event| {
        let Some(link) = dom::event_element(&event)
            .and_then(|element| element.closest(NEW_TAB_LINK).ok().flatten())
        else {
            return;
        };
        if link.has_attribute("rel") {
            return;
        }
        if let Err(e) = link.set_attribute("rel", SAFE_REL) {
            warn!("event=external_link status=failed error={}", describe(&e));
        }
    })
}
