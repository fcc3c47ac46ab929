//! Runs the four content sections concurrently and applies their outcomes.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Promise};
use lab_site_core::alumni::Alumni;
use lab_site_core::config::REVEAL_ATTACH_DELAY_MS;
use lab_site_core::members::Members;
use lab_site_core::news::News;
use lab_site_core::publications::{PublicationCatalog, Publications};
use lab_site_core::{settle, Outcome, Resource, Section};
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{Document, HtmlElement};

use crate::dom::{self, describe};
use crate::fetch::fetch_document;
use crate::{publications, reveal};

/// Publications loaded at startup, read by the year filter afterwards.
pub type CatalogCache = Rc<RefCell<Option<PublicationCatalog>>>;

/// Loads every section, waits for all of them to settle, then schedules the
/// reveal observer.
pub async fn load_all() {
    let catalog: CatalogCache = Rc::new(RefCell::new(None));

    let pipelines = Array::new();
    pipelines.push(&section_promise(async {
        run::<Members>().await;
    }));
    pipelines.push(&section_promise({
        let catalog = catalog.clone();
        async move {
            if let Some(view) = run::<Publications>().await {
                *catalog.borrow_mut() = Some(view);
                if let Err(e) = publications::wire_filter(&catalog) {
                    warn!("event=year_filter status=skipped error={}", describe(&e));
                }
            }
        }
    }));
    pipelines.push(&section_promise(async {
        run::<News>().await;
    }));
    pipelines.push(&section_promise(async {
        run::<Alumni>().await;
    }));

    // Each pipeline resolves regardless of its own outcome.
    if let Err(e) = JsFuture::from(Promise::all(&pipelines)).await {
        error!("event=sections_settle status=failed error={}", describe(&e));
    }
    info!("event=sections_settle status=ok");

    if let Err(e) = schedule_reveal() {
        warn!("event=reveal_schedule status=failed error={}", describe(&e));
    }
}

fn section_promise<F>(pipeline: F) -> Promise
where
    F: std::future::Future<Output = ()> + 'static,
{
    future_to_promise(async move {
        pipeline.await;
        Ok(JsValue::UNDEFINED)
    })
}

/// Fetches one section and writes its outcome into the page.
async fn run<S: Section>() -> Option<S::View> {
    let settled = settle::<S>(fetch_document::<S>().await);
    if let Err(e) = apply(S::RESOURCE, &settled.outcome) {
        error!(
            "event=section_apply section={} status=failed error={}",
            S::RESOURCE,
            describe(&e)
        );
    }
    settled.view
}

/// Replaces the section container's content, or hides the section.
pub fn apply(resource: Resource, outcome: &Outcome) -> Result<(), JsValue> {
    let document = dom::document()?;
    match outcome.markup() {
        Some(markup) => dom::by_id(&document, resource.container_id())?.set_inner_html(markup),
        None => hide_section(&document, resource.section_id())?,
    }
    Ok(())
}

/// Hides `#<section_id>` and the list item of every nav entry pointing at it.
fn hide_section(document: &Document, section_id: &str) -> Result<(), JsValue> {
    if let Some(section) = document.get_element_by_id(section_id) {
        section
            .dyn_into::<HtmlElement>()?
            .style()
            .set_property("display", "none")?;
    }

    for link in dom::query_all(document, &format!(r##"a[href="#{section_id}"]"##))? {
        if let Some(item) = link.closest("li")? {
            item.dyn_into::<HtmlElement>()?
                .style()
                .set_property("display", "none")?;
        }
    }
    Ok(())
}

/// Attaches the reveal observer after one layout pass.
fn schedule_reveal() -> Result<(), JsValue> {
    let attach = Closure::once_into_js(|| {
        if let Err(e) = dom::document().and_then(|document| reveal::attach(&document)) {
            warn!("event=reveal_attach status=failed error={}", describe(&e));
        }
    });
    dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        attach.unchecked_ref(),
        REVEAL_ATTACH_DELAY_MS,
    )?;
    Ok(())
}
