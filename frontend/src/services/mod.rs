//! Page logic that does not touch the DOM directly.
//!
//! # Services
//!
//! - [`validation`] - Excel allow-list and size formatting
//! - [`picker`] - file picker guard (accept / reject / clear)
//! - [`selection`] - card selection tracker and select-all toggle
//! - [`guards`] - submission guard state machine
//! - [`progress`] - cosmetic upload progress model
//! - [`status`] - dashboard auto-refresh decision
//! - [`notifier`] - blocking notification seam
//!
//! # JavaScript Bindings
//!
//! [`toolkit`] binds the Bootstrap and Feather globals loaded by the page.

pub mod validation;
pub mod picker;
pub mod selection;
pub mod guards;
pub mod progress;
pub mod status;
pub mod notifier;
pub mod toolkit;

pub use validation::*;
pub use picker::*;
pub use selection::*;
pub use guards::*;
pub use progress::*;
pub use status::*;
pub use notifier::*;
pub use toolkit::*;
