//! Mobile menu, sticky header, smooth in-page scrolling and active link
//! highlighting.

use std::rc::Rc;

use lab_site_core::config::{classes, ids};
use lab_site_core::nav::{
    active_section, anchor_target, is_active_link, is_in_page, is_scrolled, scroll_destination,
    MenuState, SectionBounds,
};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{self, describe};

/// Wires the menu, then the scroll-driven header and links. A missing menu
/// leaves scrolling intact and a missing header only drops the `scrolled`
/// class and the scroll offset.
pub fn wire(window: &Window, document: &Document) {
    if let Err(e) = wire_menu(document) {
        warn!("event=wire component=menu status=skipped error={}", describe(&e));
    }

    let header = document
        .get_element_by_id(ids::HEADER)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok());
    if header.is_none() {
        warn!("event=wire component=header status=skipped error=missing #{}", ids::HEADER);
    }

    if let Err(e) = wire_scroll(window, document, header.clone()) {
        warn!("event=wire component=scroll status=skipped error={}", describe(&e));
    }
    if let Err(e) = wire_anchors(window, document, header) {
        warn!("event=wire component=anchors status=skipped error={}", describe(&e));
    }
}

fn set_menu(toggle: &Element, menu: &Element, state: MenuState) {
    let written = dom::set_class(toggle, classes::ACTIVE, state.is_open())
        .and_then(|()| dom::set_class(menu, classes::ACTIVE, state.is_open()));
    if let Err(e) = written {
        warn!("event=menu_state status=failed error={}", describe(&e));
    }
}

fn close_menu(toggle: &Element, menu: &Element) {
    let current = MenuState::from_active(dom::has_class(toggle, classes::ACTIVE));
    if current.is_open() {
        set_menu(toggle, menu, current.close());
    }
}

fn wire_menu(document: &Document) -> Result<(), JsValue> {
    let toggle = dom::by_id(document, ids::MENU_TOGGLE)?;
    let menu = dom::by_id(document, ids::NAV_MENU)?;

    {
        let (button, panel) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            let next = MenuState::from_active(dom::has_class(&button, classes::ACTIVE)).toggle();
            set_menu(&button, &panel, next);
        })?;
    }

    for link in dom::query_all(document, &format!(".{}", classes::NAV_LINK))? {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        dom::listen(&link, "click", move |_| {
            close_menu(&toggle, &menu);
        })?;
    }

    dom::listen(document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        if !menu.contains(Some(&target)) && !toggle.contains(Some(&target)) {
            close_menu(&toggle, &menu);
        }
    })
}

fn wire_scroll(
    window: &Window,
    document: &Document,
    header: Option<HtmlElement>,
) -> Result<(), JsValue> {
    let sections = dom::query_all(document, "section[id]")?
        .into_iter()
        .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
        .collect::<Vec<_>>();
    let links = dom::query_all(document, &format!(".{}", classes::NAV_LINK))?;

    let refresh = {
        let window = window.clone();
        Rc::new(move || {
            let scroll_y = window.scroll_y().unwrap_or_default();
            if let Some(header) = &header {
                if let Err(e) = dom::set_class(header, classes::SCROLLED, is_scrolled(scroll_y)) {
                    warn!("event=header_scrolled status=failed error={}", describe(&e));
                }
            }
            highlight_active(&sections, &links, scroll_y);
        })
    };

    refresh();
    for event in ["scroll", "load"] {
        let refresh = refresh.clone();
        dom::listen(window, event, move |_| refresh())?;
    }
    Ok(())
}

// Offsets are re-read on every call since rendered sections change height.
fn highlight_active(sections: &[HtmlElement], links: &[Element], scroll_y: f64) {
    let bounds = sections
        .iter()
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.client_height()),
            )
        })
        .collect::<Vec<_>>();
    let active = active_section(scroll_y, &bounds);

    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        if let Err(e) = dom::set_class(link, classes::ACTIVE, is_active_link(&href, active)) {
            warn!("event=active_link href={href} status=failed error={}", describe(&e));
        }
    }
}

fn wire_anchors(
    window: &Window,
    document: &Document,
    header: Option<HtmlElement>,
) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, r##"a[href^="#"]"##)? {
        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();

        dom::listen(&anchor, "click", move |event| {
            if !is_in_page(&href) {
                return;
            }
            event.prevent_default();

            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document
                .get_element_by_id(id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            else {
                debug!("event=anchor_scroll target={id} status=missing");
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(scroll_destination(
                f64::from(target.offset_top()),
                header.as_ref().map(|header| f64::from(header.offset_height())),
            ));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}
