//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - the candidate file pending validation
//! - **Alert Types** - banner severity levels
//! - **Error Types** - user-input validation failures

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::{INVALID_FILE_MESSAGE, NO_FILE_MESSAGE, NO_MEASURE_MESSAGE};

// =============================================================================
// File Types
// =============================================================================

/// A file chosen or dropped by the user, pending validation.
///
/// Only the metadata the browser exposes is kept; the content is never read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFile {
    /// Filename as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type, empty when the browser could not sniff one
    pub mime_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

impl From<&web_sys::File> for CandidateFile {
    fn from(file: &web_sys::File) -> Self {
        // Blob sizes are JS numbers; a negative or NaN value never comes from a real file.
        let size = file.size().max(0.0) as u64;
        Self::new(file.name(), size, file.type_())
    }
}

// =============================================================================
// Alert Types
// =============================================================================

/// Bootstrap alert flavour used for in-page banners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertLevel {
    /// Level from a JS `type` string; unknown or missing types fall back to `Info`.
    pub fn from_js_type(value: Option<&str>) -> Self {
        value
            .and_then(|v| serde_json::from_value(serde_json::Value::String(v.to_string())).ok())
            .unwrap_or_default()
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertLevel::Info => "alert-info",
            AlertLevel::Success => "alert-success",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Danger => "alert-danger",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The validation variants render as the message shown to the user.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Chosen or dropped file is not an Excel workbook.
    #[error("{}", INVALID_FILE_MESSAGE)]
    InvalidFileType,

    /// Upload form submitted without a file.
    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    /// Measure form submitted with every card unchecked.
    #[error("{}", NO_MEASURE_MESSAGE)]
    NoMeasureSelected,

    /// A browser API call failed.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Whether the error comes from user input and should be shown to the user.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, AppError::Dom(_))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(format!("{:?}", value))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
