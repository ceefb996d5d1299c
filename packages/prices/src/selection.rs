//! Per-panel selection state.
//!
//! A panel holds the labels currently chosen in its dropdowns, in the
//! panel's own display language. All transitions are pure: they take the
//! current state and an event and return the next state.

use crate::catalog::Catalog;
use crate::dataset::Dataset;
use crate::projection::{project_comparison, project_trend, ChartSeries};
use crate::types::{Dimension, Lang};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub item: String,
    pub region: String,
    pub month: String,
}

impl Selection {
    /// First entry of every list in `lang`.
    pub fn first(catalog: &Catalog, lang: Lang) -> Self {
        let first = |dimension| {
            catalog
                .category(dimension)
                .first(lang)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            item: first(Dimension::Item),
            region: first(Dimension::Region),
            month: first(Dimension::Month),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Item => &self.item,
            Dimension::Region => &self.region,
            Dimension::Month => &self.month,
        }
    }

    pub fn set(&mut self, dimension: Dimension, label: String) {
        match dimension {
            Dimension::Item => self.item = label,
            Dimension::Region => self.region = label,
            Dimension::Month => self.month = label,
        }
    }

    /// Re-express every selected label in `to`, looking each one up in the
    /// outgoing `from` list. Labels missing from `from` reset to the first
    /// entry of `to`.
    pub fn reconcile(&self, catalog: &Catalog, from: Lang, to: Lang) -> Self {
        let mut next = Selection::default();
        for dimension in Dimension::ALL {
            let label = catalog
                .category(dimension)
                .translate(self.get(dimension), from, to)
                .unwrap_or_default();
            next.set(dimension, label.to_string());
        }
        next
    }
}

/// User interaction on a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    ToggleLanguage,
    Select { dimension: Dimension, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub lang: Lang,
    pub selection: Selection,
}

impl PanelState {
    pub fn new(catalog: &Catalog, lang: Lang) -> Self {
        Self {
            lang,
            selection: Selection::first(catalog, lang),
        }
    }

    pub fn apply(&self, catalog: &Catalog, event: PanelEvent) -> Self {
        match event {
            PanelEvent::ToggleLanguage => {
                let to = self.lang.toggled();
                tracing::debug!("selection.toggle: {} -> {}", self.lang, to);
                Self {
                    lang: to,
                    selection: self.selection.reconcile(catalog, self.lang, to),
                }
            }
            PanelEvent::Select { dimension, label } => {
                let mut next = self.clone();
                next.selection.set(dimension, label);
                next
            }
        }
    }

    /// Prices of the selected item in the selected region, one per month.
    pub fn trend_series(&self, dataset: &Dataset) -> ChartSeries {
        project_trend(
            dataset,
            self.lang,
            &self.selection.item,
            &self.selection.region,
        )
    }

    /// Prices of every item in the selected region and month.
    pub fn comparison_series(&self, dataset: &Dataset) -> ChartSeries {
        project_comparison(
            dataset,
            self.lang,
            &self.selection.region,
            &self.selection.month,
        )
    }
}
