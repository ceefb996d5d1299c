use dioxus::prelude::*;
use prices::DashboardConfig;
use tracing_subscriber::EnvFilter;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_tracing();

    let config = DashboardConfig::from_env();
    tracing::info!(
        "startup: page_lang={} trend_lang={} comparison_lang={}",
        config.page_lang,
        config.trend_lang,
        config.comparison_lang
    );
    if let Err(err) = prices::bundled() {
        tracing::error!("startup: bundled dataset rejected: {err}");
    }

    dioxus::launch(App);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus may have installed a subscriber already; keep whichever came first
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[component]
fn App() -> Element {
    let config = use_hook(DashboardConfig::from_env);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::DashboardTheme {}
        ui::Dashboard { config }
    }
}
