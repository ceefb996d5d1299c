use dioxus::prelude::*;
use prices::{Dimension, Lang, PanelEvent, PanelState};

use crate::panel::{dispatch, owned_labels, DatasetRef, LabelSelect, PanelHeader};
use crate::{t, LineChart};

/// Price of one item in one province or territory, month by month.
#[component]
pub fn PriceTrendPanel(dataset: DatasetRef, initial_lang: Lang) -> Element {
    let catalog = &dataset.0.catalog;
    let state = use_signal(|| PanelState::new(catalog, initial_lang));

    let current = state();
    let lang = current.lang;
    let series = current.trend_series(dataset.0);
    let caption = series.caption.clone();

    rsx! {
        div { class: "custom_card",
            PanelHeader {
                lang,
                title: t(lang, "trend.title"),
                about: t(lang, "trend.about"),
                on_toggle: move |_| dispatch(state, catalog, PanelEvent::ToggleLanguage),
            }
            div { class: "filters",
                LabelSelect {
                    aria_label: t(lang, "filter.item"),
                    options: owned_labels(catalog.items.labels(lang)),
                    value: current.selection.item.clone(),
                    on_change: move |label| {
                        dispatch(state, catalog, PanelEvent::Select { dimension: Dimension::Item, label })
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
            LineChart { series, lang }
        }
    }
}
