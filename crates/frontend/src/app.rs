use crate::dashboards::StoreOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <StoreOverviewDashboard />
    }
}
