//! Alert panel container
//!
//! Polls the alert list for the active severity filter every ten seconds.
//! Fetch failures keep whatever was last shown; acknowledging an alert
//! triggers exactly one immediate refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::alert_list::AlertList;
use crate::config;
use crate::model::{unacknowledged_count, Alert, SeverityFilter};
use crate::poll::use_polling;

/// Filter buttons, unacknowledged count, and the auto-refreshing alert list
#[component]
pub fn AlertPanel() -> impl IntoView {
    let alerts = RwSignal::new(Vec::<Alert>::new());
    let filter = RwSignal::new(SeverityFilter::All);
    let loading = RwSignal::new(true);

    let fetch_alerts = move || {
        spawn_local(async move {
            match api::fetch_alerts(filter.get_untracked()).await {
                Ok(list) => alerts.set(list),
                Err(err) => log::error!("Failed to fetch alerts: {}", err),
            }
            loading.set(false);
        });
    };

    use_polling(
        config::POLLING_INTERVAL,
        move || filter.track(),
        fetch_alerts,
    );

    let acknowledge = move |alert_id: i64| {
        spawn_local(async move {
            match api::acknowledge_alert(alert_id).await {
                Ok(()) => fetch_alerts(),
                Err(err) => log::error!("Failed to acknowledge alert {}: {}", alert_id, err),
            }
        });
    };

    view! {
        <div class="alert-panel">
            <div class="alert-header">
                <h2>
                    {move || {
                        format!("Active Alerts ({})", alerts.with(|list| unacknowledged_count(list)))
                    }}
                </h2>
                <div class="alert-filters">
                    {SeverityFilter::CHOICES.into_iter().map(|choice| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || filter.get() == choice
                                on:click=move |_| filter.set(choice)
                            >
                                {choice.label()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading alerts..."</div> }.into_any()
                } else {
                    view! { <AlertList alerts=alerts.get() on_acknowledge=acknowledge /> }
                        .into_any()
                }
            }}
        </div>
    }
}
