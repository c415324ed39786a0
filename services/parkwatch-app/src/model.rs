//! Records received from the parking backend
//!
//! These types mirror the backend JSON structures. The UI treats them as
//! read-only snapshots; the display helpers live alongside so formatting
//! rules stay testable off the browser.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Alert priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Wire form, also used for badge and filter labels
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }

    /// CSS class fragment for styling alert rows
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity filter for the alert panel; `All` omits the query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityFilter {
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// The four mutually exclusive filter choices, in display order
    pub const CHOICES: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::Critical),
        SeverityFilter::Only(Severity::Warning),
        SeverityFilter::Only(Severity::Info),
    ];

    /// Filter button label
    pub fn label(self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(severity) => severity.as_str(),
        }
    }

    /// Query parameter value, if this filter narrows by severity
    pub fn severity_param(self) -> Option<&'static str> {
        match self {
            SeverityFilter::All => None,
            SeverityFilter::Only(severity) => Some(severity.as_str()),
        }
    }
}

/// Aggregate counters for the summary cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_events: u64,
    pub current_occupancy: u64,
    pub total_devices: u64,
    pub active_devices: u64,
    pub alerts_today: u64,
    pub critical_alerts: u64,
}

/// Per-zone event statistics.
///
/// `status` stays a plain string so an unrecognized value degrades to the
/// warning badge instead of failing the whole summary decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneStat {
    pub zone_name: String,
    pub zone_code: String,
    pub events: u64,
    pub target: u64,
    pub efficiency: f64,
    pub status: String,
}

/// One backend-generated alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub severity: Severity,
    pub alert_type: String,
    pub message: String,
    pub device_code: String,
    pub zone_name: String,
    pub created_at: String,
    pub is_acknowledged: bool,
}

impl Alert {
    /// Creation time as shown in the alert meta row
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at, "%b %d, %H:%M")
    }
}

/// Full dashboard payload for one selected date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub zones: Vec<ZoneStat>,
    pub timestamp: String,
}

impl DashboardResponse {
    /// Refresh time as shown in the "Last updated" footer
    pub fn timestamp_display(&self) -> String {
        format_timestamp(&self.timestamp, "%H:%M:%S")
    }
}

/// Alerts not yet acknowledged in the loaded list
pub fn unacknowledged_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|alert| !alert.is_acknowledged).count()
}

/// Render a backend ISO-8601 timestamp with the given format string,
/// falling back to the raw value if it does not parse.
fn format_timestamp(raw: &str, format: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(format).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(format).to_string();
    }
    raw.to_string()
}
