use dioxus::prelude::*;
use prices::DashboardConfig;

#[component]
pub fn Home() -> Element {
    rsx! { ui::Dashboard { config: DashboardConfig::default() } }
}
