use dioxus::prelude::*;
use prices::DashboardConfig;

use crate::panel::DatasetRef;
use crate::{t, PriceComparisonPanel, PriceTrendPanel};

/// The whole single-page dashboard: header, the two chart panels and the
/// data source footer.
#[component]
pub fn Dashboard(config: DashboardConfig) -> Element {
    let lang = config.page_lang;

    let dataset = match prices::bundled() {
        Ok(dataset) => DatasetRef(dataset),
        Err(err) => {
            return rsx! {
                div { class: "dashboard",
                    p { class: "error", {format!("{} {err}", t(lang, "common.error_prefix"))} }
                }
            }
        }
    };
    let source = &dataset.source;
    let source_title = source.title.get(lang).clone();

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard_header",
                h2 { class: "dashboard_title", {t(lang, "page.title")} }
                p { class: "dashboard_description",
                    {format!("{}, {}.", t(lang, "page.description"), source.period.get(lang))}
                }
            }
            div { class: "dashboard_grid",
                PriceTrendPanel { dataset, initial_lang: config.trend_lang }
                PriceComparisonPanel { dataset, initial_lang: config.comparison_lang }
            }
            div { class: "dataset_source",
                small {
                    {t(lang, "page.source")}
                    " "
                    a {
                        href: "{source.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "{source_title}",
                        {t(lang, "page.source_link")}
                    }
                }
            }
        }
    }
}

/// Shown by launchers with a router for unknown paths.
#[component]
pub fn NotFound(lang: prices::Lang) -> Element {
    rsx! {
        div { class: "dashboard",
            h2 { class: "dashboard_title", {t(lang, "page.not_found")} }
            a { class: "about_text", href: "/", {t(lang, "page.back_home")} }
        }
    }
}
