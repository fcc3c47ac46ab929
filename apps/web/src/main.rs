mod dom;
mod external;
mod fetch;
mod logging;
mod members;
mod navigation;
mod publications;
mod reveal;
mod sections;

use log::{error, info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::dom::describe;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    if let Err(e) = boot() {
        error!("event=boot status=failed error={}", describe(&e));
    }
}

// The script may run before the markup has been parsed.
fn boot() -> Result<(), JsValue> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| start())
    } else {
        start();
        Ok(())
    }
}

fn start() {
    let (window, document) = match dom::window().and_then(|w| Ok((w, dom::document()?))) {
        Ok(handles) => handles,
        Err(e) => {
            error!("event=start status=failed error={}", describe(&e));
            return;
        }
    };

    // Each wiring step is independent; a missing element only disables its
    // own feature.
    navigation::wire(&window, &document);
    if let Err(e) = external::wire(&document) {
        warn!("event=wire component=external_links status=skipped error={}", describe(&e));
    }
    if let Err(e) = members::wire(&document) {
        warn!("event=wire component=members status=skipped error={}", describe(&e));
    }

    info!("event=start status=ok");
    spawn_local(sections::load_all());
}
