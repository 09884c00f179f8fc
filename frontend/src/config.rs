//! Application configuration.
//!
//! Centralized constants for the measure filter frontend: the DOM contract
//! with the server-rendered templates, the Excel allow-list, timings and
//! user-facing messages. The page markup is owned by the server, so these
//! are hardcoded rather than loaded at runtime.

// =============================================================================
// DOM contract - upload page
// =============================================================================

/// Drag & drop zone wrapping the file input.
pub const UPLOAD_AREA_ID: &str = "uploadArea";
/// Native `<input type="file">`.
pub const FILE_INPUT_ID: &str = "fileInput";
/// Region shown while no file is chosen.
pub const UPLOAD_PLACEHOLDER_ID: &str = "uploadPlaceholder";
/// Region showing the chosen file's name and size.
pub const UPLOAD_INFO_ID: &str = "uploadInfo";
pub const FILE_NAME_ID: &str = "fileName";
pub const FILE_SIZE_ID: &str = "fileSize";
pub const UPLOAD_FORM_ID: &str = "uploadForm";
pub const SUBMIT_BUTTON_ID: &str = "submitBtn";
/// Container of the cosmetic progress bar.
pub const UPLOAD_PROGRESS_ID: &str = "uploadProgress";
/// Inner bar whose width is animated.
pub const PROGRESS_BAR_SELECTOR: &str = ".progress-bar";

// =============================================================================
// DOM contract - measure selection page
// =============================================================================

pub const MEASURE_CARD_SELECTOR: &str = ".measure-card";
pub const CARD_CHECKBOX_SELECTOR: &str = "input[type=\"checkbox\"]";
pub const SELECT_ALL_BUTTON_ID: &str = "selectAllBtn";
pub const MEASURE_FORM_ID: &str = "measureForm";
pub const PROCESSING_MODAL_ID: &str = "processingModal";

// =============================================================================
// DOM contract - shared
// =============================================================================

pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";
pub const PROCESSING_STATUS_SELECTOR: &str = "[data-status=\"processing\"]";
/// Alert banners are prepended to the first element matching this.
pub const ALERT_CONTAINER_SELECTOR: &str = ".container";

/// Class toggled on the drop zone while a file hovers over it.
pub const DRAGOVER_CLASS: &str = "dragover";
/// Class mirroring a card's checked checkbox.
pub const SELECTED_CLASS: &str = "selected";

/// Path fragment that arms the job status auto-refresh.
pub const DASHBOARD_PATH_MARKER: &str = "dashboard";

// =============================================================================
// File validation
// =============================================================================

/// MIME types accepted for upload (xlsx, then legacy xls).
pub const EXCEL_MIME_TYPES: [&str; 2] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

/// Lowercase filename suffixes accepted for upload.
pub const EXCEL_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

/// Size unit suffixes, one per power of 1024.
pub const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

// =============================================================================
// Timings
// =============================================================================

/// Tick of the cosmetic upload progress animation.
pub const PROGRESS_TICK_MS: u64 = 200;

/// Upper bound (exclusive) of a single progress increment, in percent.
pub const PROGRESS_MAX_STEP: f64 = 30.0;

/// Alert banners remove themselves after this delay.
pub const ALERT_DISMISS_MS: u32 = 5_000;

/// Dashboard reload delay while jobs are processing.
pub const STATUS_REFRESH_MS: u32 = 30_000;

// =============================================================================
// Labels & messages
// =============================================================================

pub const INVALID_FILE_MESSAGE: &str = "Please select a valid Excel file (.xlsx or .xls)";
pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";
pub const NO_MEASURE_MESSAGE: &str = "Please select at least one measure to process.";

/// Submit button label while the upload is in flight.
pub const UPLOADING_LABEL_HTML: &str =
    r#"<span class="spinner-border spinner-border-sm me-2"></span>Uploading..."#;

/// Select-all button label when not every card is checked.
pub const SELECT_ALL_LABEL_HTML: &str =
    r#"<i data-feather="check-square" class="me-2"></i>Select All"#;

/// Select-all button label when every card is checked.
pub const DESELECT_ALL_LABEL_HTML: &str =
    r#"<i data-feather="square" class="me-2"></i>Deselect All"#;
