//! Zone performance table

use leptos::prelude::*;

use crate::model::ZoneStat;

/// Badge label and color for a zone status; unrecognized values get the
/// warning badge
fn status_badge(status: &str) -> (&'static str, &'static str) {
    match status {
        "good" => ("Good", "#10b981"),
        "warning" => ("Warning", "#f59e0b"),
        "poor" => ("Poor", "#ef4444"),
        _ => ("Warning", "#f59e0b"),
    }
}

/// Fill color for the efficiency bar
fn bar_color(status: &str) -> &'static str {
    match status {
        "good" => "#10b981",
        "warning" => "#f59e0b",
        _ => "#ef4444",
    }
}

/// Displayed bar width in percent, capped at 100
fn bar_width(efficiency: f64) -> f64 {
    efficiency.min(100.0)
}

/// Text shown next to the bar, uncapped
fn efficiency_text(efficiency: f64) -> String {
    format!("{}%", efficiency)
}

/// Per-zone event statistics with efficiency bars and status badges
#[component]
pub fn ZoneTable(zones: Vec<ZoneStat>) -> impl IntoView {
    view! {
        <div class="zone-table-container">
            <h2>"Zone Performance"</h2>
            <table class="zone-table">
                <thead>
                    <tr>
                        <th>"Zone"</th>
                        <th>"Events"</th>
                        <th>"Target"</th>
                        <th>"Efficiency"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {zones.into_iter().map(|zone| {
                        let (label, badge_color) = status_badge(&zone.status);
                        let badge_style = format!("background-color: {};", badge_color);
                        let fill = format!(
                            "width: {}%; background-color: {};",
                            bar_width(zone.efficiency),
                            bar_color(&zone.status),
                        );
                        let text = efficiency_text(zone.efficiency);
                        view! {
                            <tr>
                                <td>
                                    <strong>{zone.zone_name}</strong>
                                    <span class="zone-code">{format!(" ({})", zone.zone_code)}</span>
                                </td>
                                <td>{zone.events}</td>
                                <td>{zone.target}</td>
                                <td>
                                    <div class="efficiency-bar">
                                        <div class="efficiency-fill" style=fill></div>
                                        <span class="efficiency-text">{text}</span>
                                    </div>
                                </td>
                                <td>
                                    <span class="status-badge" style=badge_style>
                                        {label}
                                    </span>
                                </td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_maps_known_statuses() {
        assert_eq!(status_badge("good"), ("Good", "#10b981"));
        assert_eq!(status_badge("warning"), ("Warning", "#f59e0b"));
        assert_eq!(status_badge("poor"), ("Poor", "#ef4444"));
    }

    #[test]
    fn badge_defaults_unknown_statuses_to_warning() {
        assert_eq!(status_badge("sparkling"), ("Warning", "#f59e0b"));
        assert_eq!(status_badge(""), ("Warning", "#f59e0b"));
    }

    #[test]
    fn bar_width_caps_at_one_hundred() {
        assert_eq!(bar_width(125.0), 100.0);
        assert_eq!(bar_width(100.0), 100.0);
        assert_eq!(bar_width(87.5), 87.5);
        assert_eq!(bar_width(0.0), 0.0);
    }

    #[test]
    fn efficiency_text_is_not_capped() {
        assert_eq!(efficiency_text(125.0), "125%");
        assert_eq!(efficiency_text(87.5), "87.5%");
    }

    #[test]
    fn bar_color_follows_status() {
        assert_eq!(bar_color("good"), "#10b981");
        assert_eq!(bar_color("warning"), "#f59e0b");
        assert_eq!(bar_color("poor"), "#ef4444");
        assert_eq!(bar_color("unknown"), "#ef4444");
    }

    #[test]
    fn overachieving_zone_caps_bar_but_not_text() {
        let zone = ZoneStat {
            zone_name: "North Garage".to_string(),
            zone_code: "NG".to_string(),
            events: 80,
            target: 100,
            efficiency: 125.0,
            status: "good".to_string(),
        };
        assert_eq!(bar_width(zone.efficiency), 100.0);
        assert_eq!(efficiency_text(zone.efficiency), "125%");
        assert_eq!(bar_color(&zone.status), "#10b981");
    }
}
