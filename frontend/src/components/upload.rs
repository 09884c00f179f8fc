//! Excel upload area with drag & drop support.
//!
//! Wires the drop zone and the native file input to the file picker guard.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, HtmlElement};

use crate::components::page::{listen, set_visible, UploadElements};
use crate::config::DRAGOVER_CLASS;
use crate::services::{handle_pick, FileInfoDisplay, Notifier, PickOutcome};
use crate::types::CandidateFile;

/// Placeholder / info regions of the upload area.
#[derive(Clone, Debug)]
pub struct UploadDisplay {
    placeholder: Option<HtmlElement>,
    info: Option<HtmlElement>,
    file_name: Option<Element>,
    file_size: Option<Element>,
}

impl UploadDisplay {
    pub fn new(elements: &UploadElements) -> Self {
        Self {
            placeholder: elements.placeholder.clone(),
            info: elements.info.clone(),
            file_name: elements.file_name.clone(),
            file_size: elements.file_size.clone(),
        }
    }
}

impl FileInfoDisplay for UploadDisplay {
    fn show_file_info(&self, name: &str, size: &str) {
        let (Some(placeholder), Some(info), Some(name_el), Some(size_el)) =
            (&self.placeholder, &self.info, &self.file_name, &self.file_size)
        else {
            return;
        };
        name_el.set_text_content(Some(name));
        size_el.set_text_content(Some(size));
        set_visible(placeholder, false);
        set_visible(info, true);
    }

    fn show_placeholder(&self) {
        let (Some(placeholder), Some(info)) = (&self.placeholder, &self.info) else {
            return;
        };
        set_visible(placeholder, true);
        set_visible(info, false);
    }
}

/// Attach drag & drop and change handlers.
///
/// Skipped entirely when the page has no drop zone or no file input.
pub fn init_file_upload<N>(elements: &UploadElements, notifier: Rc<N>) -> bool
where
    N: Notifier + 'static,
{
    let (Some(area), Some(input)) = (elements.area.clone(), elements.input.clone()) else {
        log::debug!("No upload area on this page");
        return false;
    };
    let display = Rc::new(UploadDisplay::new(elements));

    listen(&area, "dragover", {
        let area = area.clone();
        move |ev| {
            ev.prevent_default();
            _ = area.class_list().add_1(DRAGOVER_CLASS);
        }
    });

    listen(&area, "dragleave", {
        let area = area.clone();
        move |ev| {
            ev.prevent_default();
            _ = area.class_list().remove_1(DRAGOVER_CLASS);
        }
    });

    listen(&area, "drop", {
        let area = area.clone();
        let input = input.clone();
        let display = Rc::clone(&display);
        let notifier = Rc::clone(&notifier);
        move |ev| {
            ev.prevent_default();
            _ = area.class_list().remove_1(DRAGOVER_CLASS);

            let Some(files) = ev
                .dyn_ref::<DragEvent>()
                .and_then(|drag| drag.data_transfer())
                .and_then(|transfer| transfer.files())
            else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };

            let candidate = CandidateFile::from(&file);
            if let PickOutcome::Accepted(_) = handle_pick(Some(candidate), &*display, &*notifier) {
                input.set_files(Some(&files));
            }
        }
    });

    listen(&input, "change", {
        let input = input.clone();
        move |_| {
            let candidate = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| CandidateFile::from(&file));

            if handle_pick(candidate, &*display, &*notifier) == PickOutcome::Rejected {
                input.set_value("");
            }
        }
    });

    log::info!("📤 File upload ready");
    true
}
