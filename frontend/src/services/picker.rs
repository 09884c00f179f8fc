//! File picker guard.
//!
//! Decides what happens when the user chooses, drops or clears a file, and
//! keeps the placeholder / info regions in step with that decision.

use crate::services::notifier::Notifier;
use crate::services::validation::{format_file_size, validate_excel_file};
use crate::types::CandidateFile;

/// The two mutually exclusive regions of the upload area.
pub trait FileInfoDisplay {
    /// Hide the placeholder and show `name` and `size`.
    fn show_file_info(&self, name: &str, size: &str);

    /// Hide the info region and show the placeholder.
    fn show_placeholder(&self);
}

/// Result of a pick, telling the caller what to do with the native input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// Keep (or assign) the file.
    Accepted(CandidateFile),
    /// Invalid file; the caller must not let it reach the form.
    Rejected,
    /// Nothing selected any more.
    Cleared,
}

/// Validate a newly picked file and update the display.
///
/// `None` means the user cleared the selection.
pub fn handle_pick(
    candidate: Option<CandidateFile>,
    display: &impl FileInfoDisplay,
    notifier: &impl Notifier,
) -> PickOutcome {
    if let Some(file) = &candidate {
        log::debug!("Picked {}", serde_json::to_string(file).unwrap_or_default());
    }

    let Some(file) = candidate else {
        display.show_placeholder();
        return PickOutcome::Cleared;
    };

    match validate_excel_file(&file) {
        Ok(()) => {
            log::info!("📄 Accepted {} ({} bytes)", file.name, file.size);
            display.show_file_info(&file.name, &format_file_size(file.size));
            PickOutcome::Accepted(file)
        }
        Err(e) => {
            notifier.report(&e);
            PickOutcome::Rejected
        }
    }
}
