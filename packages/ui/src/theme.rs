use dioxus::prelude::*;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

#[component]
pub fn DashboardTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: DASHBOARD_CSS } }
}
