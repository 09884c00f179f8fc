//! Dashboard auto-refresh while jobs are processing.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Window};

use crate::config::{PROCESSING_STATUS_SELECTOR, STATUS_REFRESH_MS};
use crate::services::should_schedule_refresh;

/// Schedule a single page reload if this is a dashboard with running jobs.
pub fn init_status_refresh(window: &Window, document: &Document) -> bool {
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    let processing = document
        .query_selector_all(PROCESSING_STATUS_SELECTOR)
        .map_or(0, |nodes| nodes.length() as usize);

    if !should_schedule_refresh(&pathname, processing) {
        return false;
    }

    log::info!("🔄 {} jobs processing, reloading in {}s", processing, STATUS_REFRESH_MS / 1000);
    Timeout::new(STATUS_REFRESH_MS, move || {
        if let Err(e) = location.reload() {
            log::warn!("Reload failed: {:?}", e);
        }
    })
    .forget();
    true
}
