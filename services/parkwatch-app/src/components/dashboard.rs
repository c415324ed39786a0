//! Dashboard container
//!
//! Polls the daily summary for the selected date every ten seconds.
//! Changing the date tears the running interval down and starts a fresh
//! cycle with an immediate fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::summary_cards::SummaryCards;
use crate::components::zone_table::ZoneTable;
use crate::config;
use crate::error::ApiError;
use crate::model::DashboardResponse;
use crate::poll::use_polling;

/// Error text shown in place of the dashboard content
fn display_error(error: &ApiError) -> String {
    match error {
        ApiError::Api {
            message: Some(message),
            ..
        } => message.clone(),
        _ => "Failed to fetch dashboard data".to_string(),
    }
}

/// Today in the `YYYY-MM-DD` form the date input expects
fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date(),
    )
}

/// Summary cards, zone table, and date picker with auto-refresh
#[component]
pub fn Dashboard() -> impl IntoView {
    let data = RwSignal::new(None::<DashboardResponse>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected_date = RwSignal::new(today());

    let fetch_dashboard = move || {
        spawn_local(async move {
            let date = selected_date.get_untracked();
            match api::fetch_summary(&date).await {
                Ok(response) => {
                    data.set(Some(response));
                    error.set(None);
                }
                Err(err) => {
                    log::error!("Failed to fetch dashboard: {}", err);
                    error.set(Some(display_error(&err)));
                }
            }
            loading.set(false);
        });
    };

    use_polling(
        config::POLLING_INTERVAL,
        move || selected_date.track(),
        fetch_dashboard,
    );

    move || {
        if loading.get() {
            return view! { <div class="loading">"Loading dashboard..."</div> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! { <div class="error">{format!("Error: {}", message)}</div> }.into_any();
        }
        match data.get() {
            None => ().into_any(),
            Some(response) => {
                let updated = format!("Last updated: {}", response.timestamp_display());
                let max_date = today();
                view! {
                    <div class="dashboard">
                        <div class="dashboard-header">
                            <h1>"Smart Parking Monitoring"</h1>
                            <div class="date-picker">
                                <input
                                    type="date"
                                    prop:value=move || selected_date.get()
                                    max=max_date
                                    on:input=move |ev| selected_date.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <SummaryCards summary=response.summary />
                        <ZoneTable zones=response.zones />

                        <div class="last-updated">{updated}</div>
                    </div>
                }
                .into_any()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_message_is_shown_verbatim() {
        let error = ApiError::Api {
            status: 400,
            message: Some("Date cannot be in the future".to_string()),
        };
        assert_eq!(display_error(&error), "Date cannot be in the future");
    }

    #[test]
    fn transport_errors_get_the_generic_message() {
        let error = ApiError::Http("connection refused".to_string());
        assert_eq!(display_error(&error), "Failed to fetch dashboard data");
    }

    #[test]
    fn status_without_backend_message_gets_the_generic_message() {
        let error = ApiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(display_error(&error), "Failed to fetch dashboard data");
    }

    #[test]
    fn decode_failures_get_the_generic_message() {
        let error = ApiError::Decode("missing field `summary`".to_string());
        assert_eq!(display_error(&error), "Failed to fetch dashboard data");
    }
}
