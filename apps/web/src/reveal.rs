//! Scroll-triggered fade-in for `.fade-in` elements.

use js_sys::Array;
use lab_site_core::config::classes;
use lab_site_core::reveal::{
    ObserverOptions, Reveal, HIDDEN_STYLE, REVEALED_STYLE, STATE_ATTRIBUTE,
};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom::{self, describe};

/// Hides every pending `.fade-in` element and watches it until it first
/// enters the viewport.
pub fn attach(document: &Document) -> Result<(), JsValue> {
    let options = ObserverOptions::default();

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if let Err(e) = advance(&entry.target(), entry.is_intersecting(), &observer) {
                warn!("event=reveal status=failed error={}", describe(&e));
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    let mut watched = 0_usize;
    for element in dom::query_all(document, &format!(".{}", classes::FADE_IN))? {
        if state_of(&element) == Reveal::Revealed {
            continue;
        }
        let element = element.dyn_into::<HtmlElement>()?;
        dom::set_styles(&element, &HIDDEN_STYLE)?;
        element.set_attribute(STATE_ATTRIBUTE, Reveal::Pending.as_str())?;
        observer.observe(&element);
        watched += 1;
    }

    debug!("event=reveal_attach status=ok watched={watched}");
    Ok(())
}

fn state_of(element: &Element) -> Reveal {
    Reveal::parse(element.get_attribute(STATE_ATTRIBUTE).as_deref())
}

fn advance(
    target: &Element,
    is_intersecting: bool,
    observer: &IntersectionObserver,
) -> Result<(), JsValue> {
    let (next, fire) = state_of(target).on_intersection(is_intersecting);
    if !fire {
        return Ok(());
    }

    if let Some(element) = target.dyn_ref::<HtmlElement>() {
        dom::set_styles(element, &REVEALED_STYLE)?;
    }
    target.set_attribute(STATE_ATTRIBUTE, next.as_str())?;
    observer.unobserve(target);
    Ok(())
}
