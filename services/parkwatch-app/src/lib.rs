//! ParkWatch Dashboard - Leptos frontend
//!
//! Reactive web UI for monitoring smart-parking zones, devices, and alerts.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod poll;

pub use app::App;
pub use error::{ApiError, Result};
