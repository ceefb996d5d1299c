use dioxus::logger::tracing::{error, info, Level};
use dioxus::prelude::*;

use views::{Home, PageNotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("startup: logger init failed: {err}");
    }
    install_panic_hook();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let config = prices::DashboardConfig::default();
    info!(
        "startup: page_lang={} trend_lang={} comparison_lang={}",
        config.page_lang, config.trend_lang, config.comparison_lang
    );

    if let Err(err) = prices::bundled() {
        error!("startup: bundled dataset rejected: {err}");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::DashboardTheme {}
        Router::<Route> {}
    }
}
