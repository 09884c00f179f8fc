//! Handles to the server-rendered markup.
//!
//! Every element is looked up once at startup. Missing elements become
//! `None` and the feature that needs them is skipped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement,
};

use crate::config::*;
use crate::services::SelectionCard;

/// A `.measure-card` and the checkbox inside it.
#[derive(Clone, Debug)]
pub struct MeasureCard {
    pub card: Element,
    pub checkbox: HtmlInputElement,
}

impl SelectionCard for MeasureCard {
    fn is_checked(&self) -> bool {
        self.checkbox.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.checkbox.set_checked(checked);
    }

    fn set_selected(&self, selected: bool) {
        let classes = self.card.class_list();
        let result = if selected {
            classes.add_1(SELECTED_CLASS)
        } else {
            classes.remove_1(SELECTED_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle card class: {:?}", e);
        }
    }
}

/// Elements of the upload area.
#[derive(Clone, Debug, Default)]
pub struct UploadElements {
    pub area: Option<HtmlElement>,
    pub input: Option<HtmlInputElement>,
    pub placeholder: Option<HtmlElement>,
    pub info: Option<HtmlElement>,
    pub file_name: Option<Element>,
    pub file_size: Option<Element>,
}

/// Elements the submission guards need.
#[derive(Clone, Debug, Default)]
pub struct FormElements {
    pub upload_form: Option<HtmlFormElement>,
    pub submit_button: Option<HtmlButtonElement>,
    pub upload_progress: Option<HtmlElement>,
    pub measure_form: Option<HtmlFormElement>,
    pub processing_modal: Option<Element>,
}

/// Everything the page script binds to.
#[derive(Clone, Debug)]
pub struct Page {
    pub document: Document,
    pub upload: UploadElements,
    pub forms: FormElements,
    pub measure_cards: Vec<MeasureCard>,
    pub select_all_button: Option<HtmlElement>,
}

impl Page {
    pub fn from_document(document: &Document) -> Self {
        let page = Self {
            document: document.clone(),
            upload: UploadElements {
                area: by_id(document, UPLOAD_AREA_ID),
                input: by_id(document, FILE_INPUT_ID),
                placeholder: by_id(document, UPLOAD_PLACEHOLDER_ID),
                info: by_id(document, UPLOAD_INFO_ID),
                file_name: by_id(document, FILE_NAME_ID),
                file_size: by_id(document, FILE_SIZE_ID),
            },
            forms: FormElements {
                upload_form: by_id(document, UPLOAD_FORM_ID),
                submit_button: by_id(document, SUBMIT_BUTTON_ID),
                upload_progress: by_id(document, UPLOAD_PROGRESS_ID),
                measure_form: by_id(document, MEASURE_FORM_ID),
                processing_modal: by_id(document, PROCESSING_MODAL_ID),
            },
            measure_cards: measure_cards(document),
            select_all_button: by_id(document, SELECT_ALL_BUTTON_ID),
        };

        log::debug!(
            "Page bound: upload area {}, {} measure cards",
            page.upload.area.is_some(),
            page.measure_cards.len()
        );
        page
    }
}

/// `getElementById` cast to the expected element type.
fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

fn measure_cards(document: &Document) -> Vec<MeasureCard> {
    let Ok(nodes) = document.query_selector_all(MEASURE_CARD_SELECTOR) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
        .filter_map(|card| {
            let checkbox = card
                .query_selector(CARD_CHECKBOX_SELECTOR)
                .ok()??
                .dyn_into::<HtmlInputElement>()
                .ok()?;
            Some(MeasureCard { card, checkbox })
        })
        .collect()
}

/// Show or hide an element through its inline `display` style.
pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        log::warn!("Failed to set display: {:?}", e);
    }
}

/// Attach `handler` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("Failed to listen for {}: {:?}", event, e);
        return;
    }
    // Page-lifetime listener, never removed.
    closure.forget();
}
