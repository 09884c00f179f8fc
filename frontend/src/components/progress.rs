//! Cosmetic upload progress bar.
//!
//! Purely decorative: see [`CosmeticProgress`]. The animation runs as a
//! [`ProgressTask`] that owns its interval and clears it when done.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use web_sys::HtmlElement;

use crate::config::PROGRESS_TICK_MS;
use crate::services::{CosmeticProgress, ProgressTick};
use crate::types::AppResult;

/// A running (or finished) progress animation.
#[derive(Clone)]
pub struct ProgressTask {
    bar: HtmlElement,
    progress: Rc<RefCell<CosmeticProgress>>,
    handle: Rc<Cell<Option<IntervalHandle>>>,
}

impl ProgressTask {
    /// Reset `bar` to 0% and start ticking.
    pub fn start(bar: HtmlElement) -> AppResult<Self> {
        let task = Self {
            bar,
            progress: Rc::new(RefCell::new(CosmeticProgress::new())),
            handle: Rc::new(Cell::new(None)),
        };
        task.render();

        let tick = task.clone();
        let handle = set_interval_with_handle(
            move || {
                let step = tick.progress.borrow_mut().advance_random(&mut rand::thread_rng());
                tick.render();
                if step == ProgressTick::Finished {
                    tick.clear();
                }
            },
            Duration::from_millis(PROGRESS_TICK_MS),
        )?;
        task.handle.set(Some(handle));

        Ok(task)
    }

    pub fn is_running(&self) -> bool {
        // IntervalHandle is Copy, so peek without taking it.
        self.handle.get().is_some()
    }

    pub fn value(&self) -> f64 {
        self.progress.borrow().value()
    }

    /// Jump to 100% and stop.
    pub fn stop(&self) {
        self.progress.borrow_mut().complete();
        self.render();
        self.clear();
    }

    /// Stop where it is.
    pub fn cancel(&self) {
        self.clear();
    }

    fn clear(&self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }

    fn render(&self) {
        let width = self.progress.borrow().css_width();
        if let Err(e) = self.bar.style().set_property("width", &width) {
            log::warn!("Failed to render progress: {:?}", e);
        }
    }
}
