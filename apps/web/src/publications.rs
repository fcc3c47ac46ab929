use lab_site_core::config::ids;
use lab_site_core::publications::PublicationCatalog;
use lab_site_core::Resource;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::dom::{self, describe};
use crate::sections::{apply, CatalogCache};

/// Fills the year filter from the loaded catalog and re-renders the list on
/// every change.
pub fn wire_filter(catalog: &CatalogCache) -> Result<(), JsValue> {
    let document = dom::document()?;
    let select = dom::by_id(&document, ids::YEAR_FILTER)?.dyn_into::<HtmlSelectElement>()?;

    let years = catalog
        .borrow()
        .as_ref()
        .map(PublicationCatalog::years)
        .unwrap_or_default();
    for year in years {
        let label = year.to_string();
        let option = document
            .create_element("option")?
            .dyn_into::<HtmlOptionElement>()?;
        option.set_value(&label);
        option.set_text_content(Some(&label));
        select.append_child(&option)?;
    }

    let catalog = catalog.clone();
    dom::listen(&select, "change", move |event| {
        let Some(select) = dom::event_element(&event)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };

        let cache = catalog.borrow();
        let Some(publications) = cache.as_ref() else {
            return;
        };

        let value = select.value();
        debug!("event=year_filter value={value}");
        if let Err(e) = apply(Resource::Publications, &publications.render_value(&value)) {
            error!("event=year_filter status=failed error={}", describe(&e));
        }
    })
}
