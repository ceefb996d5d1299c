use dioxus::prelude::*;
use prices::{Catalog, Dataset, Lang, PanelEvent, PanelState};
use std::ops::Deref;

use crate::t;

/// Handle to the bundled dataset that can be passed as a component prop.
#[derive(Debug, Clone, Copy)]
pub struct DatasetRef(pub &'static Dataset);

impl PartialEq for DatasetRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Deref for DatasetRef {
    type Target = Dataset;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Apply a user event to a panel's state signal.
pub(crate) fn dispatch(mut state: Signal<PanelState>, catalog: &Catalog, event: PanelEvent) {
    tracing::debug!("panel.dispatch: {:?}", event);
    let next = state.read().apply(catalog, event);
    state.set(next);
}

/// Card title with the "About" tooltip and the language toggle.
///
/// The toggle is labelled with the language it switches *to*.
#[component]
pub fn PanelHeader(lang: Lang, title: String, about: String, on_toggle: EventHandler<()>) -> Element {
    let about_aria = format!("{} {title}", t(lang, "panel.about_aria"));
    let toggle_aria = format!("{} {title}", t(lang, "panel.toggle_aria"));

    rsx! {
        div { class: "panel_header",
            h3 { class: "graph_title", "{title}" }
            div { class: "panel_actions",
                span {
                    class: "about_text",
                    tabindex: "0",
                    "role": "button",
                    "aria-label": "{about_aria}",
                    {t(lang, "panel.about")}
                    span { class: "about_tooltip", "role": "tooltip", "{about}" }
                }
                button {
                    class: "about_text lang_toggle",
                    r#type: "button",
                    lang: lang.toggled().code(),
                    "aria-label": "{toggle_aria}",
                    onclick: move |_| on_toggle.call(()),
                    {lang.toggled().native_name()}
                }
            }
        }
    }
}

/// Dropdown over one label list. Emits the chosen label.
#[component]
pub fn LabelSelect(
    aria_label: String,
    options: Vec<String>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "filter_select",
            "aria-label": "{aria_label}",
            value: "{value}",
            onchange: move |e: FormEvent| on_change.call(e.value()),
            for choice in options.iter() {
                option {
                    key: "{choice}",
                    value: "{choice}",
                    selected: *choice == value,
                    "{choice}"
                }
            }
        }
    }
}

pub(crate) fn owned_labels(labels: Vec<&str>) -> Vec<String> {
    labels.into_iter().map(str::to_string).collect()
}
