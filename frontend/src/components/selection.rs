//! Measure card selection.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::components::page::{listen, MeasureCard};
use crate::services::{on_card_click, replace_icons, sync_all, toggle_all, ClickSource};

/// Make cards clickable and wire the select-all button.
pub fn init_measure_selection(cards: Rc<Vec<MeasureCard>>, select_all: Option<HtmlElement>) {
    sync_all(cards.as_slice());

    for card in cards.iter() {
        listen(&card.card, "click", {
            let card = card.clone();
            move |ev| {
                let on_checkbox = ev
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                    .map_or(false, |input| input.type_() == "checkbox");
                let source = if on_checkbox {
                    ClickSource::Checkbox
                } else {
                    ClickSource::Body
                };
                on_card_click(&card, source);
            }
        });
    }

    if let Some(button) = select_all {
        let target = button.clone();
        listen(&target, "click", move |_| {
            let label = toggle_all(cards.as_slice());
            button.set_inner_html(label.html());
            replace_icons();
        });
    }

    log::info!("☑️ Measure selection ready");
}
