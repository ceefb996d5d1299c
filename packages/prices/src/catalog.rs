//! Bilingual label catalog.
//!
//! Every selectable entity (item, region, month) is stored once with a stable
//! key and both display labels. The per-language label lists the UI shows are
//! derived from the same entries, so position `i` in English and position `i`
//! in French always name the same entity.

use serde::{Deserialize, Serialize};

use crate::types::{Dimension, Lang};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    pub en: String,
    pub fr: String,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            en: en.into(),
            fr: fr.into(),
        }
    }

    pub fn label(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Fr => &self.fr,
        }
    }
}

/// Ordered entries of one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    entries: Vec<CatalogEntry>,
}

impl Category {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in display order for one language.
    pub fn labels(&self, lang: Lang) -> Vec<&str> {
        self.entries.iter().map(|e| e.label(lang)).collect()
    }

    pub fn label(&self, index: usize, lang: Lang) -> Option<&str> {
        self.entries.get(index).map(|e| e.label(lang))
    }

    pub fn first(&self, lang: Lang) -> Option<&str> {
        self.label(0, lang)
    }

    /// Position of `label` in the `lang` list. Exact match only.
    pub fn position(&self, lang: Lang, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label(lang) == label)
    }

    pub fn key_of(&self, lang: Lang, label: &str) -> Option<&str> {
        self.position(lang, label)
            .map(|index| self.entries[index].key.as_str())
    }

    /// Translate a label of the `from` list into the `to` list.
    ///
    /// The label is looked up in the outgoing (`from`) list; if it is not
    /// there the first label of `to` is returned. `None` only when the
    /// category is empty.
    pub fn translate(&self, label: &str, from: Lang, to: Lang) -> Option<&str> {
        match self.position(from, label) {
            Some(index) => self.label(index, to),
            None => self.first(to),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub items: Category,
    pub regions: Category,
    pub months: Category,
}

impl Catalog {
    pub fn category(&self, dimension: Dimension) -> &Category {
        match dimension {
            Dimension::Item => &self.items,
            Dimension::Region => &self.regions,
            Dimension::Month => &self.months,
        }
    }
}
