//! Browser notifications: blocking `alert()` and dismissible banners.

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::{ALERT_CONTAINER_SELECTOR, ALERT_DISMISS_MS};
use crate::services::Notifier;
use crate::types::AlertLevel;

/// Blocking notifications through `window.alert`.
#[derive(Clone, Debug)]
pub struct WindowNotifier {
    window: Window,
}

impl WindowNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for WindowNotifier {
    fn notify_blocking(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert() failed: {:?}", e);
        }
    }
}

/// Prepend a dismissible banner to the page container.
///
/// The banner removes itself after [`ALERT_DISMISS_MS`] unless the user
/// closed it first. Returns `false` when the page has no container.
pub fn show_alert(document: &Document, message: &str, level: AlertLevel) -> bool {
    let Ok(Some(container)) = document.query_selector(ALERT_CONTAINER_SELECTOR) else {
        return false;
    };

    let banner = view! {
        <div class=format!("alert {} alert-dismissible fade show", level.css_class()) role="alert">
            {message.to_string()}
            <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
        </div>
    };
    let element: web_sys::Element = (*banner).clone().into();

    if let Err(e) = container.insert_before(&element, container.first_child().as_ref()) {
        log::warn!("Failed to insert alert: {:?}", e);
        return false;
    }

    Timeout::new(ALERT_DISMISS_MS, move || {
        if element.parent_node().is_some() {
            element.remove();
        }
    })
    .forget();

    true
}

/// `showAlert(message, type)` for inline template scripts.
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert_js(message: &str, level: Option<String>) -> bool {
    let level = AlertLevel::from_js_type(level.as_deref());

    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => show_alert(&document, message, level),
        None => false,
    }
}
