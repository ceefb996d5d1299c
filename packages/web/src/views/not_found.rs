use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    debug!("router: no route for /{}", segments.join("/"));
    rsx! { ui::NotFound { lang: ui::Lang::En } }
}
