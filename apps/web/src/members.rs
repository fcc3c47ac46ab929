use lab_site_core::config::{classes, ids};
use lab_site_core::members::{photo_fallback, BioState};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::dom::{self, describe};

/// Delegated handlers on the members container: biography toggles and the
/// photo placeholder. Registered once, so they cover every later render.
pub fn wire(document: &Document) -> Result<(), JsValue> {
    let container = dom::by_id(document, ids::MEMBERS_CONTAINER)?;

    let toggle_selector = format!(".{}", classes::BIO_TOGGLE);
    let owner = document.clone();
    dom::listen(&container, "click", move |event| {
        let Some(button) = dom::event_element(&event)
            .and_then(|element| element.closest(&toggle_selector).ok().flatten())
        else {
            return;
        };
        if let Err(e) = toggle_bio(&owner, &button) {
            warn!("event=bio_toggle status=failed error={}", describe(&e));
        }
    })?;

    dom::listen_capture(&container, "error", |event| {
        let Some(image) = dom::event_element(&event)
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        if !dom::has_class(&image, classes::MEMBER_IMAGE) {
            return;
        }
        if let Some(placeholder) = photo_fallback(image.get_attribute("src").as_deref()) {
            image.set_src(placeholder);
        }
    })
}

fn toggle_bio(document: &Document, button: &Element) -> Result<(), JsValue> {
    let Some(bio_id) = button.get_attribute("data-bio") else {
        return Ok(());
    };
    let bio = dom::by_id(document, &bio_id)?;

    let next = BioState::from_truncated(dom::has_class(&bio, classes::TRUNCATED)).toggle();
    dom::set_class(&bio, classes::TRUNCATED, next.is_truncated())?;
    button.set_text_content(Some(next.label()));
    Ok(())
}
