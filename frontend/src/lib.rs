//! MIPS Measure Filter - browser-side form interactivity
//!
//! A WebAssembly module loaded by the server-rendered upload, measure
//! selection and dashboard pages. It never renders those pages; it binds to
//! the markup that is already there.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  main (wasm start)                                           │
//! │  └── initialize(Page) once the document is ready            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  components  (web-sys wiring, one initializer per feature)   │
//! │  ├── file upload ──────► services::picker / validation      │
//! │  ├── measure selection ► services::selection                │
//! │  ├── form guards ──────► services::guards / progress        │
//! │  └── status refresh ───► services::status                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  services::toolkit  (bootstrap / feather globals)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - DOM contract, allow-lists, timings and messages
//! - [`types`] - Common types (CandidateFile, AppError, etc.)
//! - [`services`] - DOM-free page logic
//! - [`components`] - DOM wiring

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod services;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

pub use types::{
    // Files
    CandidateFile,
    // Alerts
    AlertLevel,
    // Errors
    AppError, AppResult,
};

pub use components::{ArmedGuards, Page, WindowNotifier};

// =============================================================================
// Application Entry Point
// =============================================================================

/// What [`initialize`] managed to wire on the current page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Initialized {
    pub tooltips: usize,
    pub file_upload: bool,
    pub measure_cards: usize,
    pub guards: ArmedGuards,
    pub status_refresh: bool,
}

/// WASM entry point - called automatically once the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🩺 MIPS Measure Filter - binding page");

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // The module may load before or after DOMContentLoaded.
    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        components::listen(&document, "DOMContentLoaded", move |_| {
            on_ready(&ready_window, &ready_document);
        });
    } else {
        on_ready(&window, &document);
    }
}

fn on_ready(window: &Window, document: &Document) {
    let page = Page::from_document(document);
    let summary = initialize(window, page);
    log::debug!("Page initialized: {:?}", summary);
}

/// Wire every feature whose elements exist on `page`. Call once.
pub fn initialize(window: &Window, page: Page) -> Initialized {
    let notifier = Rc::new(WindowNotifier::new(window.clone()));
    let cards = Rc::new(page.measure_cards);

    let tooltips = services::init_tooltips(&page.document);
    let file_upload = components::init_file_upload(&page.upload, Rc::clone(&notifier));
    components::init_measure_selection(Rc::clone(&cards), page.select_all_button);
    let guards = components::init_form_handling(
        &page.forms,
        page.upload.input.clone(),
        Rc::clone(&cards),
        notifier,
    );
    let status_refresh = components::init_status_refresh(window, &page.document);

    Initialized {
        tooltips,
        file_upload,
        measure_cards: cards.len(),
        guards,
        status_refresh,
    }
}
