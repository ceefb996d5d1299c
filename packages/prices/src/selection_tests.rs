#![cfg(test)]

use approx::assert_relative_eq;
use proptest::prelude::*;

use crate::catalog::{Catalog, CatalogEntry, Category};
use crate::dataset::{Dataset, SourceInfo};
use crate::selection::{PanelEvent, PanelState, Selection};
use crate::table::PriceTable;
use crate::types::{Dimension, Lang, Localized};

fn source() -> SourceInfo {
    SourceInfo {
        title: Localized {
            en: "Prices".to_string(),
            fr: "Prix".to_string(),
        },
        period: Localized {
            en: "Q1".to_string(),
            fr: "T1".to_string(),
        },
        url: "https://example.org".to_string(),
    }
}

fn catalog() -> Catalog {
    Catalog {
        items: Category::new(vec![
            CatalogEntry::new("milk", "Milk", "Lait"),
            CatalogEntry::new("bread", "Bread", "Pain"),
        ]),
        regions: Category::new(vec![
            CatalogEntry::new("ON", "Ontario", "Ontario"),
            CatalogEntry::new("QC", "Quebec", "Québec"),
        ]),
        months: Category::new(vec![
            CatalogEntry::new("jan", "Jan", "janv."),
            CatalogEntry::new("feb", "Feb", "févr."),
            CatalogEntry::new("mar", "Mar", "mars"),
        ]),
    }
}

fn dataset() -> Dataset {
    let mut prices = PriceTable::default();
    prices.insert("milk", "ON", "jan", 4.50);
    prices.insert("milk", "ON", "mar", 4.75);
    prices.insert("bread", "ON", "feb", 3.25);
    prices.insert("bread", "QC", "jan", 3.10);
    Dataset::new(source(), catalog(), prices).unwrap()
}

fn select(state: &PanelState, dimension: Dimension, label: &str) -> PanelState {
    state.apply(
        &catalog(),
        PanelEvent::Select {
            dimension,
            label: label.to_string(),
        },
    )
}

#[test]
fn new_state_starts_on_first_entries() {
    let state = PanelState::new(&catalog(), Lang::Fr);
    assert_eq!(state.lang, Lang::Fr);
    assert_eq!(state.selection.item, "Lait");
    assert_eq!(state.selection.region, "Ontario");
    assert_eq!(state.selection.month, "janv.");
}

#[test]
fn toggle_translates_every_selected_label() {
    let state = PanelState::new(&catalog(), Lang::En);
    let state = select(&state, Dimension::Item, "Bread");
    let state = select(&state, Dimension::Region, "Quebec");
    let state = select(&state, Dimension::Month, "Mar");

    let toggled = state.apply(&catalog(), PanelEvent::ToggleLanguage);
    assert_eq!(toggled.lang, Lang::Fr);
    assert_eq!(
        toggled.selection,
        Selection {
            item: "Pain".to_string(),
            region: "Québec".to_string(),
            month: "mars".to_string(),
        }
    );
}

#[test]
fn toggle_resets_unknown_labels_to_first_entry() {
    let state = PanelState::new(&catalog(), Lang::En);
    let state = select(&state, Dimension::Item, "Cheese");
    let state = select(&state, Dimension::Month, "Feb");

    let toggled = state.apply(&catalog(), PanelEvent::ToggleLanguage);
    assert_eq!(toggled.selection.item, "Lait");
    assert_eq!(toggled.selection.month, "févr.");
}

#[test]
fn toggle_looks_labels_up_in_outgoing_language() {
    // A French label left in an English panel is not an English label.
    let state = PanelState {
        lang: Lang::En,
        selection: Selection {
            item: "Pain".to_string(),
            region: "Ontario".to_string(),
            month: "Jan".to_string(),
        },
    };
    let toggled = state.apply(&catalog(), PanelEvent::ToggleLanguage);
    assert_eq!(toggled.selection.item, "Lait");
}

#[test]
fn toggle_twice_restores_selection() {
    let state = select(&PanelState::new(&catalog(), Lang::En), Dimension::Item, "Bread");
    let back = state
        .apply(&catalog(), PanelEvent::ToggleLanguage)
        .apply(&catalog(), PanelEvent::ToggleLanguage);
    assert_eq!(back, state);
}

#[test]
fn select_only_changes_one_field() {
    let state = PanelState::new(&catalog(), Lang::En);
    let next = select(&state, Dimension::Region, "Quebec");
    assert_eq!(next.lang, state.lang);
    assert_eq!(next.selection.item, state.selection.item);
    assert_eq!(next.selection.region, "Quebec");
    assert_eq!(next.selection.month, state.selection.month);
}

#[test]
fn trend_series_has_one_value_per_month_with_zero_gaps() {
    let ds = dataset();
    let state = PanelState::new(&ds.catalog, Lang::En);
    let series = state.trend_series(&ds);

    assert_eq!(series.caption, "Milk - Ontario");
    assert_eq!(series.labels, vec!["Jan", "Feb", "Mar"]);
    assert_eq!(series.len(), 3);
    assert_relative_eq!(series.values[0], 4.50);
    assert_relative_eq!(series.values[1], 0.0);
    assert_relative_eq!(series.values[2], 4.75);
    assert_relative_eq!(series.max_value(), 4.75);
}

#[test]
fn trend_series_follows_panel_language() {
    let ds = dataset();
    let state = PanelState::new(&ds.catalog, Lang::En).apply(&ds.catalog, PanelEvent::ToggleLanguage);
    let series = state.trend_series(&ds);

    assert_eq!(series.caption, "Lait - Ontario");
    assert_eq!(series.labels, vec!["janv.", "févr.", "mars"]);
    assert_eq!(series.values, vec![4.50, 0.0, 4.75]);
}

#[test]
fn comparison_series_has_one_value_per_item() {
    let ds = dataset();
    let state = PanelState::new(&ds.catalog, Lang::En);
    let state = state.apply(
        &ds.catalog,
        PanelEvent::Select {
            dimension: Dimension::Month,
            label: "Feb".to_string(),
        },
    );
    let series = state.comparison_series(&ds);

    assert_eq!(series.caption, "Price - Ontario - Feb");
    assert_eq!(series.labels, vec!["Milk", "Bread"]);
    assert_eq!(series.values, vec![0.0, 3.25]);

    let fr = state.apply(&ds.catalog, PanelEvent::ToggleLanguage);
    let series = fr.comparison_series(&ds);
    assert_eq!(series.caption, "Prix - Ontario - févr.");
    assert_eq!(series.labels, vec!["Lait", "Pain"]);
}

#[test]
fn unknown_labels_project_to_zeros() {
    let ds = dataset();
    let state = PanelState::new(&ds.catalog, Lang::En);
    let state = select(&state, Dimension::Region, "Yukon");

    assert_eq!(state.trend_series(&ds).values, vec![0.0; 3]);
    assert_eq!(state.comparison_series(&ds).values, vec![0.0; 2]);
}

fn generated_category(n: usize) -> Category {
    Category::new(
        (0..n)
            .map(|i| CatalogEntry::new(format!("k{i}"), format!("en-{i}"), format!("fr-{i}")))
            .collect(),
    )
}

proptest! {
    #[test]
    fn toggle_keeps_position_and_round_trips(
        (n, k) in (1usize..12).prop_flat_map(|n| (Just(n), 0..n)),
        start_fr in any::<bool>(),
    ) {
        let category = generated_category(n);
        let catalog = Catalog {
            items: category.clone(),
            regions: category.clone(),
            months: category,
        };
        let from = if start_fr { Lang::Fr } else { Lang::En };
        let to = from.toggled();

        let mut state = PanelState::new(&catalog, from);
        for dimension in Dimension::ALL {
            let label = catalog.category(dimension).label(k, from).unwrap().to_string();
            state = state.apply(&catalog, PanelEvent::Select { dimension, label });
        }

        let toggled = state.apply(&catalog, PanelEvent::ToggleLanguage);
        for dimension in Dimension::ALL {
            prop_assert_eq!(
                toggled.selection.get(dimension),
                catalog.category(dimension).label(k, to).unwrap()
            );
        }

        let back = toggled.apply(&catalog, PanelEvent::ToggleLanguage);
        prop_assert_eq!(back, state);
    }

    #[test]
    fn absent_labels_fall_back_to_first(n in 1usize..12, junk in "[a-z]{1,8}") {
        let catalog = Catalog {
            items: generated_category(n),
            regions: generated_category(n),
            months: generated_category(n),
        };
        // generated labels always contain a dash, junk never does
        let state = PanelState {
            lang: Lang::En,
            selection: Selection {
                item: junk.clone(),
                region: junk.clone(),
                month: junk,
            },
        };
        let toggled = state.apply(&catalog, PanelEvent::ToggleLanguage);
        prop_assert_eq!(toggled.selection.item.as_str(), "fr-0");
        prop_assert_eq!(toggled.selection.region.as_str(), "fr-0");
        prop_assert_eq!(toggled.selection.month.as_str(), "fr-0");
    }

    #[test]
    fn projections_cover_every_category_entry(item in 0usize..2, region in 0usize..2, month in 0usize..3, fr in any::<bool>()) {
        let ds = dataset();
        let lang = if fr { Lang::Fr } else { Lang::En };
        let label = |dimension: Dimension, i: usize| {
            ds.catalog.category(dimension).label(i, lang).unwrap().to_string()
        };
        let state = PanelState {
            lang,
            selection: Selection {
                item: label(Dimension::Item, item),
                region: label(Dimension::Region, region),
                month: label(Dimension::Month, month),
            },
        };

        let trend = state.trend_series(&ds);
        prop_assert_eq!(trend.labels, ds.catalog.months.labels(lang));
        prop_assert_eq!(trend.values.len(), ds.catalog.months.len());

        let comparison = state.comparison_series(&ds);
        prop_assert_eq!(comparison.labels, ds.catalog.items.labels(lang));
        prop_assert_eq!(comparison.values.len(), ds.catalog.items.len());
    }
}
