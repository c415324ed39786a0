//! Typed HTTP client for the parking backend
//!
//! Base URL and JSON headers are configured in one place; the request
//! functions are grouped by backend resource. Every call captures the
//! response as status plus body text and hands it to a pure decode step,
//! so the status and error handling rules are testable off the browser.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;
use crate::model::{Alert, DashboardResponse, SeverityFilter};

/// HTTP response captured before decoding
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// One meter reading as submitted by a parking device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryReading {
    pub device_code: String,
    pub voltage: f64,
    pub current: f64,
    pub power_factor: f64,
    pub timestamp: String,
}

/// Receipt for a bulk telemetry submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkReceipt {
    pub created: u64,
    pub errors: Vec<BulkError>,
}

/// Per-reading rejection inside a bulk submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkError {
    pub device_code: Option<String>,
    pub error: String,
}

/// One slot occupancy change as reported by a parking sensor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingEvent {
    pub device_code: String,
    pub is_occupied: bool,
    pub timestamp: String,
}

/// Submit a single telemetry reading
pub async fn submit_telemetry(reading: &TelemetryReading) -> crate::Result<()> {
    let response = post_json("/telemetry/", reading).await?;
    decode_unit(response)
}

/// Submit a batch of readings; per-item failures come back in the receipt
pub async fn submit_telemetry_bulk(readings: &[TelemetryReading]) -> crate::Result<BulkReceipt> {
    let payload = serde_json::json!({ "data": readings });
    let response = post_json("/telemetry/bulk/", &payload).await?;
    decode(response)
}

/// Submit a parking occupancy event
pub async fn submit_parking_log(event: &ParkingEvent) -> crate::Result<()> {
    let response = post_json("/parking-log/", event).await?;
    decode_unit(response)
}

/// Fetch the dashboard summary for a date (`YYYY-MM-DD`)
pub async fn fetch_summary(date: &str) -> crate::Result<DashboardResponse> {
    let response = get("/dashboard/summary/", &[("date", date)]).await?;
    decode(response)
}

/// Fetch alerts, newest first, optionally narrowed to one severity
pub async fn fetch_alerts(filter: SeverityFilter) -> crate::Result<Vec<Alert>> {
    let response = get("/alerts/", &alerts_query(filter)).await?;
    decode(response)
}

/// Mark one alert as acknowledged
pub async fn acknowledge_alert(id: i64) -> crate::Result<()> {
    let response = patch(&acknowledge_path(id)).await?;
    decode_unit(response)
}

/// Query parameters for an alert listing
fn alerts_query(filter: SeverityFilter) -> Vec<(&'static str, &'static str)> {
    match filter.severity_param() {
        Some(severity) => vec![("severity", severity)],
        None => Vec::new(),
    }
}

/// Path for acknowledging one alert
fn acknowledge_path(id: i64) -> String {
    format!("/alerts/{}/acknowledge/", id)
}

/// Join the configured base URL with an API path
fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn endpoint(path: &str) -> String {
    join(config::api_base_url(), path)
}

async fn get(path: &str, query: &[(&str, &str)]) -> crate::Result<ApiResponse> {
    let url = endpoint(path);
    log::debug!("GET {}", url);
    let response = gloo_net::http::Request::get(&url)
        .header("Accept", "application/json")
        .query(query.iter().copied())
        .send()
        .await
        .map_err(|e| ApiError::Http(format!("GET {} failed: {}", url, e)))?;

    capture("GET", &url, response).await
}

async fn patch(path: &str) -> crate::Result<ApiResponse> {
    let url = endpoint(path);
    log::debug!("PATCH {}", url);
    let response = gloo_net::http::Request::patch(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Http(format!("PATCH {} failed: {}", url, e)))?;

    capture("PATCH", &url, response).await
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> crate::Result<ApiResponse> {
    let url = endpoint(path);
    log::debug!("POST {}", url);
    let response = gloo_net::http::Request::post(&url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Http(format!("Encoding POST {} body: {}", url, e)))?
        .send()
        .await
        .map_err(|e| ApiError::Http(format!("POST {} failed: {}", url, e)))?;

    capture("POST", &url, response).await
}

async fn capture(
    method: &str,
    url: &str,
    response: gloo_net::http::Response,
) -> crate::Result<ApiResponse> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Http(format!("Reading response body: {}", e)))?;

    log::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
    Ok(ApiResponse { status, body })
}

/// Decode a captured response.
///
/// Non-2xx statuses surface the backend `error` field when the body carries
/// one; a 2xx body must deserialize as `T`.
fn decode<T: DeserializeOwned>(response: ApiResponse) -> crate::Result<T> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Accept any 2xx response and discard the body
fn decode_unit(response: ApiResponse) -> crate::Result<()> {
    check_status(&response)
}

fn check_status(response: &ApiResponse) -> crate::Result<()> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Api {
        status: response.status,
        message: error_field(&response.body),
    })
}

/// Pull the `error` string out of a backend error payload, if there is one
fn error_field(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
