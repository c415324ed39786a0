//! Dashboard UI components

pub mod alert_list;
pub mod alert_panel;
pub mod dashboard;
pub mod summary_cards;
pub mod zone_table;
