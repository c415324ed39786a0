//! Summary cards for the aggregate counters

use leptos::prelude::*;

use crate::model::DashboardSummary;

/// Tint applied to a card based on its derived status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Plain,
    Good,
    Warning,
    Critical,
}

impl CardStatus {
    fn css_class(self) -> &'static str {
        match self {
            CardStatus::Plain => "card",
            CardStatus::Good => "card good",
            CardStatus::Warning => "card warning",
            CardStatus::Critical => "card critical",
        }
    }
}

/// One rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub value: u64,
    pub subtitle: Option<String>,
    pub icon: &'static str,
    pub status: CardStatus,
}

/// Derive the four fixed cards from the summary counters.
///
/// The devices card goes good only when every device is active; the alerts
/// card goes critical as soon as one critical alert exists today.
pub fn build_cards(summary: &DashboardSummary) -> Vec<Card> {
    vec![
        Card {
            title: "Total Events",
            value: summary.total_events,
            subtitle: None,
            icon: "📊",
            status: CardStatus::Plain,
        },
        Card {
            title: "Current Occupancy",
            value: summary.current_occupancy,
            subtitle: Some(format!("/ {} slots", summary.total_devices)),
            icon: "🚗",
            status: CardStatus::Plain,
        },
        Card {
            title: "Active Devices",
            value: summary.active_devices,
            subtitle: Some(format!("/ {} devices", summary.total_devices)),
            icon: "📡",
            status: if summary.active_devices == summary.total_devices {
                CardStatus::Good
            } else {
                CardStatus::Warning
            },
        },
        Card {
            title: "Alerts Today",
            value: summary.alerts_today,
            subtitle: Some(format!("{} critical", summary.critical_alerts)),
            icon: "⚠️",
            status: if summary.critical_alerts > 0 {
                CardStatus::Critical
            } else {
                CardStatus::Good
            },
        },
    ]
}

/// Four fixed cards derived from the dashboard summary
#[component]
pub fn SummaryCards(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="summary-cards">
            {build_cards(&summary).into_iter().map(|card| {
                let class = card.status.css_class();
                view! {
                    <div class=class>
                        <div class="card-icon">{card.icon}</div>
                        <div class="card-content">
                            <h3>{card.title}</h3>
                            <div class="card-value">{card.value}</div>
                            {card.subtitle.map(|subtitle| {
                                view! { <div class="card-subtitle">{subtitle}</div> }
                            })}
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DashboardSummary {
        DashboardSummary {
            total_events: 1284,
            current_occupancy: 96,
            total_devices: 120,
            active_devices: 120,
            alerts_today: 5,
            critical_alerts: 0,
        }
    }

    #[test]
    fn four_cards_in_fixed_order() {
        let cards = build_cards(&summary());
        let titles: Vec<&str> = cards.iter().map(|card| card.title).collect();
        assert_eq!(
            titles,
            vec![
                "Total Events",
                "Current Occupancy",
                "Active Devices",
                "Alerts Today"
            ]
        );
    }

    #[test]
    fn occupancy_subtitle_counts_total_slots() {
        let cards = build_cards(&summary());
        assert_eq!(cards[1].value, 96);
        assert_eq!(cards[1].subtitle.as_deref(), Some("/ 120 slots"));
    }

    #[test]
    fn devices_card_good_only_when_all_active() {
        let all_active = build_cards(&summary());
        assert_eq!(all_active[2].status, CardStatus::Good);

        let mut degraded = summary();
        degraded.active_devices = 117;
        let cards = build_cards(&degraded);
        assert_eq!(cards[2].status, CardStatus::Warning);
        assert_eq!(cards[2].subtitle.as_deref(), Some("/ 120 devices"));
    }

    #[test]
    fn alerts_card_critical_when_critical_alerts_exist() {
        let mut with_critical = summary();
        with_critical.critical_alerts = 1;
        let cards = build_cards(&with_critical);
        assert_eq!(cards[3].status, CardStatus::Critical);
        assert_eq!(cards[3].subtitle.as_deref(), Some("1 critical"));
    }

    #[test]
    fn alerts_card_good_without_critical_alerts() {
        let cards = build_cards(&summary());
        assert_eq!(cards[3].status, CardStatus::Good);
        assert_eq!(cards[3].subtitle.as_deref(), Some("0 critical"));
    }

    #[test]
    fn healthy_fleet_with_one_critical_alert() {
        let summary = DashboardSummary {
            total_events: 120,
            current_occupancy: 40,
            total_devices: 50,
            active_devices: 50,
            alerts_today: 3,
            critical_alerts: 1,
        };
        let cards = build_cards(&summary);
        assert_eq!(cards[2].status, CardStatus::Good);
        assert_eq!(cards[3].status, CardStatus::Critical);
    }
}
