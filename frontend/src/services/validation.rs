//! Client-side file validation.
//!
//! Only the filename and the declared MIME type are inspected; the file
//! content is never read in the browser.

use crate::config::{EXCEL_EXTENSIONS, EXCEL_MIME_TYPES, SIZE_UNITS};
use crate::types::{AppError, AppResult, CandidateFile};

/// Whether `file` looks like an Excel workbook.
///
/// Either signal is enough: browsers disagree on the MIME type they report
/// for spreadsheets, so a correctly named file with a wrong or empty type
/// still passes.
pub fn accept(file: &CandidateFile) -> bool {
    let mime_ok = EXCEL_MIME_TYPES.contains(&file.mime_type.as_str());
    let name = file.name.to_lowercase();
    let extension_ok = EXCEL_EXTENSIONS.iter().any(|ext| name.ends_with(ext));
    mime_ok || extension_ok
}

/// [`accept`] as a `Result`, for use with `?`.
pub fn validate_excel_file(file: &CandidateFile) -> AppResult<()> {
    if accept(file) {
        Ok(())
    } else {
        Err(AppError::InvalidFileType)
    }
}

/// Human-readable size, e.g. `1536 -> "1.5 KB"`.
///
/// Rounded to two decimals with trailing zeros dropped. Anything past the
/// gigabyte range is still expressed in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut unit = 0;
    let mut threshold: u64 = 1024;
    while unit < SIZE_UNITS.len() - 1 && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
    const XLS_MIME: &str = "application/vnd.ms-excel";

    #[test]
    fn test_accepts_excel_mime_types() {
        assert!(accept(&CandidateFile::new("export", 10, XLSX_MIME)));
        assert!(accept(&CandidateFile::new("export.bin", 10, XLS_MIME)));
    }

    #[test]
    fn test_accepts_extension_case_insensitively() {
        assert!(accept(&CandidateFile::new("Claims.XLSX", 10, "")));
        assert!(accept(&CandidateFile::new("legacy.Xls", 10, "application/octet-stream")));
    }

    #[test]
    fn test_mislabeled_but_well_named_file_is_accepted() {
        assert!(accept(&CandidateFile::new("patients.xlsx", 10, "text/plain")));
    }

    #[test]
    fn test_rejects_other_files() {
        assert!(!accept(&CandidateFile::new("patients.csv", 10, "text/csv")));
        assert!(!accept(&CandidateFile::new("patients.xlsx.pdf", 10, "application/pdf")));
        assert!(!accept(&CandidateFile::new("xlsx", 10, "")));
        assert_eq!(
            validate_excel_file(&CandidateFile::new("notes.txt", 1, "text/plain")),
            Err(AppError::InvalidFileType)
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.2050...
        assert_eq!(format_file_size(1234), "1.21 KB");
        assert_eq!(format_file_size(5 * 1_048_576 + 524_288), "5.5 MB");
    }

    #[test]
    fn test_format_file_size_clamps_to_gigabytes() {
        assert_eq!(format_file_size(2048 * 1_073_741_824), "2048 GB");
    }
}
