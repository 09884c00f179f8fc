//! Submission guards for the upload and measure forms.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::components::page::{listen, set_visible, FormElements, MeasureCard};
use crate::components::progress::ProgressTask;
use crate::config::{PROGRESS_BAR_SELECTOR, UPLOADING_LABEL_HTML};
use crate::services::{checked_count, show_modal, GuardDecision, GuardKind, Notifier, SubmissionGuard};

/// Which guards were armed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArmedGuards {
    pub upload: bool,
    pub selection: bool,
}

/// Attach both submit guards where their forms exist.
pub fn init_form_handling<N>(
    forms: &FormElements,
    file_input: Option<HtmlInputElement>,
    cards: Rc<Vec<MeasureCard>>,
    notifier: Rc<N>,
) -> ArmedGuards
where
    N: Notifier + 'static,
{
    ArmedGuards {
        upload: init_upload_guard(forms, file_input, Rc::clone(&notifier)),
        selection: init_selection_guard(forms, cards, notifier),
    }
}

fn init_upload_guard<N>(forms: &FormElements, file_input: Option<HtmlInputElement>, notifier: Rc<N>) -> bool
where
    N: Notifier + 'static,
{
    let (Some(form), Some(input)) = (forms.upload_form.clone(), file_input) else {
        return false;
    };
    let submit_button = forms.submit_button.clone();
    let progress_container = forms.upload_progress.clone();
    let guard = RefCell::new(SubmissionGuard::new(GuardKind::Upload));

    listen(&form, "submit", move |ev| {
        let file_count = input.files().map_or(0, |files| files.length()) as usize;

        match guard.borrow_mut().evaluate(file_count) {
            GuardDecision::Proceed => {}
            GuardDecision::Block(e) => {
                ev.prevent_default();
                notifier.report(&e);
                return;
            }
            GuardDecision::Duplicate => {
                ev.prevent_default();
                return;
            }
        }

        if let Some(button) = &submit_button {
            button.set_disabled(true);
            button.set_inner_html(UPLOADING_LABEL_HTML);
        }

        if let Some(container) = &progress_container {
            set_visible(container, true);
            let bar = container
                .query_selector(PROGRESS_BAR_SELECTOR)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(bar) = bar {
                // The running interval owns a handle to the task; nothing else needs one.
                if let Err(e) = ProgressTask::start(bar) {
                    log::warn!("Progress animation not started: {}", e);
                }
            }
        }
    });

    log::info!("🛡️ Upload guard armed");
    true
}

fn init_selection_guard<N>(forms: &FormElements, cards: Rc<Vec<MeasureCard>>, notifier: Rc<N>) -> bool
where
    N: Notifier + 'static,
{
    let (Some(form), Some(modal)) = (forms.measure_form.clone(), forms.processing_modal.clone()) else {
        return false;
    };
    let guard = RefCell::new(SubmissionGuard::new(GuardKind::Selection));

    listen(&form, "submit", move |ev| {
        match guard.borrow_mut().evaluate(checked_count(cards.as_slice())) {
            GuardDecision::Proceed => {
                // The native submit continues behind the modal.
                if let Err(e) = show_modal(&modal) {
                    log::warn!("Processing modal not shown: {}", e);
                }
            }
            GuardDecision::Block(e) => {
                ev.prevent_default();
                notifier.report(&e);
            }
            GuardDecision::Duplicate => ev.prevent_default(),
        }
    });

    log::info!("🛡️ Measure guard armed");
    true
}
