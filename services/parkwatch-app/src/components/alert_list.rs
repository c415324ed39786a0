//! Alert list with per-row acknowledge action

use leptos::prelude::*;

use crate::config;
use crate::model::Alert;

/// CSS classes for one alert row
fn item_class(alert: &Alert) -> String {
    let mut class = format!("alert-item {}", alert.severity.css_class());
    if alert.is_acknowledged {
        class.push_str(" acknowledged");
    }
    class
}

/// Alert rows, newest first, with an acknowledge button on the rows that
/// still need one
#[component]
pub fn AlertList(alerts: Vec<Alert>, #[prop(into)] on_acknowledge: Callback<i64>) -> impl IntoView {
    if alerts.is_empty() {
        return view! {
            <div class="alert-list">
                <div class="no-alerts">"No alerts found"</div>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="alert-list">
            {alerts.into_iter().map(|alert| {
                let alert_id = alert.id;
                let class = item_class(&alert);
                let indicator =
                    format!("background-color: {};", config::severity_color(alert.severity));
                let created_at = alert.created_at_display();
                view! {
                    <div class=class>
                        <div class="alert-indicator" style=indicator></div>
                        <div class="alert-content">
                            <div class="alert-title">
                                <span class="severity-badge">{alert.severity.as_str()}</span>
                                <span class="alert-type">{alert.alert_type}</span>
                            </div>
                            <div class="alert-message">{alert.message}</div>
                            <div class="alert-meta">
                                <span>{format!("Device: {}", alert.device_code)}</span>
                                <span>{format!("Zone: {}", alert.zone_name)}</span>
                                <span>{created_at}</span>
                            </div>
                        </div>
                        {(!alert.is_acknowledged).then(|| {
                            view! {
                                <button
                                    class="acknowledge-btn"
                                    on:click=move |_| on_acknowledge.run(alert_id)
                                >
                                    "Acknowledge"
                                </button>
                            }
                        })}
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
