//! Application configuration
//!
//! All knobs the dashboard exposes: the backend base URL, the polling
//! cadence, and the severity color table. The base URL is resolved at
//! build time so the deployed bundle needs no runtime configuration.

use std::time::Duration;

use crate::model::Severity;

/// Fallback API root for local development
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// How often the polling containers refetch their data
pub const POLLING_INTERVAL: Duration = Duration::from_millis(10_000);

/// Base URL for the parking backend API.
///
/// Taken from the `PARKWATCH_API_BASE_URL` environment variable at build
/// time, falling back to the local backend.
pub fn api_base_url() -> &'static str {
    option_env!("PARKWATCH_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Indicator color for an alert severity
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "#3b82f6",
        Severity::Warning => "#f59e0b",
        Severity::Critical => "#ef4444",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polling_interval_is_ten_seconds() {
        assert_eq!(POLLING_INTERVAL, Duration::from_secs(10));
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            severity_color(Severity::Info),
            severity_color(Severity::Warning),
            severity_color(Severity::Critical),
        ];
        assert_eq!(colors[0], "#3b82f6");
        assert_eq!(colors[1], "#f59e0b");
        assert_eq!(colors[2], "#ef4444");
    }
}
