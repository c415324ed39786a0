//! Main App component

use crate::components::alert_panel::AlertPanel;
use crate::components::dashboard::Dashboard;
use leptos::prelude::*;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <Dashboard />
            <AlertPanel />
        </main>
    }
}
