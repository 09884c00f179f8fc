//! Job status auto-refresh decision.

use crate::config::DASHBOARD_PATH_MARKER;

/// The dashboard reloads itself while any job is still processing.
pub fn should_schedule_refresh(pathname: &str, processing_jobs: usize) -> bool {
    pathname.contains(DASHBOARD_PATH_MARKER) && processing_jobs > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_on_dashboard_with_processing_jobs() {
        assert!(should_schedule_refresh("/dashboard", 1));
        assert!(should_schedule_refresh("/app/dashboard/jobs", 3));
    }

    #[test]
    fn test_no_refresh_without_processing_jobs() {
        assert!(!should_schedule_refresh("/dashboard", 0));
    }

    #[test]
    fn test_no_refresh_elsewhere() {
        assert!(!should_schedule_refresh("/upload", 2));
        assert!(!should_schedule_refresh("/", 1));
    }
}
