//! Bindings to the page's UI toolkit globals.
//!
//! Bootstrap (tooltips, modals) and Feather (icon substitution) are loaded
//! by the server templates as plain `<script>` tags. Every call catches the
//! JS exception so a page without them keeps working.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::TOOLTIP_SELECTOR;
use crate::types::AppResult;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn show(this: &Modal) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = feather, js_name = "replace", catch)]
    fn feather_replace() -> Result<(), JsValue>;
}

/// Attach a Bootstrap tooltip to every element that asks for one.
/// Returns how many were created.
pub fn init_tooltips(document: &Document) -> usize {
    let Ok(nodes) = document.query_selector_all(TOOLTIP_SELECTOR) else {
        return 0;
    };

    let mut created = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match Tooltip::new(&element) {
            Ok(_) => created += 1,
            Err(e) => {
                log::warn!("Bootstrap tooltips unavailable: {:?}", e);
                break;
            }
        }
    }

    if created > 0 {
        log::debug!("Initialized {} tooltips", created);
    }
    created
}

/// Open `element` as a Bootstrap modal.
pub fn show_modal(element: &Element) -> AppResult<()> {
    let modal = Modal::new(element)?;
    modal.show()?;
    Ok(())
}

/// Re-run Feather so freshly inserted `<i data-feather>` tags become SVGs.
pub fn replace_icons() {
    if let Err(e) = feather_replace() {
        log::warn!("Feather icons unavailable: {:?}", e);
    }
}
