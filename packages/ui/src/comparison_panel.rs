use dioxus::prelude::*;
use prices::{Dimension, Lang, PanelEvent, PanelState};

use crate::panel::{dispatch, owned_labels, DatasetRef, LabelSelect, PanelHeader};
use crate::{t, BarChart};

/// Every item's price in one province or territory for one month.
#[component]
pub fn PriceComparisonPanel(dataset: DatasetRef, initial_lang: Lang) -> Element {
    let catalog = &dataset.0.catalog;
    let state = use_signal(|| PanelState::new(catalog, initial_lang));

    let current = state();
    let lang = current.lang;
    let series = current.comparison_series(dataset.0);
    let caption = series.caption.clone();

    rsx! {
        div { class: "custom_card",
            PanelHeader {
                lang,
                title: t(lang, "comparison.title"),
                about: t(lang, "comparison.about"),
                on_toggle: move |_| dispatch(state, catalog, PanelEvent::ToggleLanguage),
            }
            div { class: "filters",
                LabelSelect {
                    aria_label: t(lang, "filter.month"),
                    options: owned_labels(catalog.months.labels(lang)),
                    value: current.selection.month.clone(),
                    on_change: move |label| {
                        dispatch(state, catalog, PanelEvent::Select { dimension: Dimension::Month, label })
                    },
                }
                LabelSelect {
                    aria_label: t(lang, "filter.region"),
                    options: owned_labels(catalog.regions.labels(lang)),
                    value: current.selection.region.clone(),
                    on_change: move |label| {
                        dispatch(state, catalog, PanelEvent::Select { dimension: Dimension::Region, label })
                    },
                }
            }
            p { class: "chart_caption", "{caption}" }
            BarChart { series, lang }
        }
    }
}
