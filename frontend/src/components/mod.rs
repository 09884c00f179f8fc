//! DOM wiring for the measure filter pages.
//!
//! Each initializer takes the handles it needs from [`Page`] and silently
//! skips its feature when they are missing.
//!
//! # Feature Components
//! - [`init_file_upload`] - Excel drop zone and file input
//! - [`init_measure_selection`] - measure cards and select-all
//! - [`init_form_handling`] - upload / measure submission guards
//! - [`ProgressTask`] - cosmetic upload progress animation
//! - [`init_status_refresh`] - dashboard auto-reload
//! - [`show_alert`] - dismissible banners

mod page;
mod notify;
mod upload;
mod selection;
mod forms;
mod progress;
mod status;

pub use page::*;
pub use notify::*;
pub use upload::*;
pub use selection::*;
pub use forms::*;
pub use progress::*;
pub use status::*;
