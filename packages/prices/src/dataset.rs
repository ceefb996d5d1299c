use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::catalog::{Catalog, CatalogEntry, Category};
use crate::error::{DatasetError, DatasetResult};
use crate::table::PriceTable;
use crate::types::{Dimension, Lang, Localized};

const BUNDLED_JSON: &str = include_str!("../data/retail_prices.json");

static BUNDLED: OnceLock<DatasetResult<Dataset>> = OnceLock::new();

/// Where the numbers come from, shown in the page header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub title: Localized<String>,
    pub period: Localized<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub source: SourceInfo,
    pub catalog: Catalog,
    pub prices: PriceTable,
}

#[derive(Deserialize)]
struct DatasetDocument {
    source: SourceInfo,
    items: Vec<CatalogEntry>,
    regions: Vec<CatalogEntry>,
    months: Vec<CatalogEntry>,
    prices: PriceTable,
}

impl Dataset {
    /// Build a dataset, rejecting structures that label lookups can't handle.
    pub fn new(source: SourceInfo, catalog: Catalog, prices: PriceTable) -> DatasetResult<Self> {
        for dimension in Dimension::ALL {
            validate_category(dimension, catalog.category(dimension))?;
        }
        validate_prices(&catalog, &prices)?;
        Ok(Self {
            source,
            catalog,
            prices,
        })
    }

    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let doc: DatasetDocument = serde_json::from_str(json)?;
        let catalog = Catalog {
            items: Category::new(doc.items),
            regions: Category::new(doc.regions),
            months: Category::new(doc.months),
        };
        Self::new(doc.source, catalog, doc.prices)
    }

    /// Price for a combination of labels in `lang`, if the table has one.
    pub fn price(&self, lang: Lang, item: &str, region: &str, month: &str) -> Option<f64> {
        let item = self.catalog.items.key_of(lang, item)?;
        let region = self.catalog.regions.key_of(lang, region)?;
        let month = self.catalog.months.key_of(lang, month)?;
        self.prices.get(item, region, month)
    }
}

/// The dataset compiled into the binary, parsed on first use.
pub fn bundled() -> DatasetResult<&'static Dataset> {
    BUNDLED
        .get_or_init(|| {
            let loaded = Dataset::from_json(BUNDLED_JSON);
            match &loaded {
                Ok(dataset) => tracing::info!(
                    "dataset.bundled: items={} regions={} months={} prices={}",
                    dataset.catalog.items.len(),
                    dataset.catalog.regions.len(),
                    dataset.catalog.months.len(),
                    dataset.prices.len()
                ),
                Err(err) => tracing::error!("dataset.bundled: {err}"),
            }
            loaded
        })
        .as_ref()
        .map_err(Clone::clone)
}

fn validate_category(dimension: Dimension, category: &Category) -> DatasetResult<()> {
    if category.is_empty() {
        return Err(DatasetError::EmptyCategory { dimension });
    }

    let mut keys = HashSet::new();
    for entry in category.entries() {
        if !keys.insert(entry.key.as_str()) {
            return Err(DatasetError::DuplicateKey {
                dimension,
                key: entry.key.clone(),
            });
        }
    }

    for lang in [Lang::En, Lang::Fr] {
        let mut seen = HashSet::new();
        for label in category.labels(lang) {
            if !seen.insert(label) {
                return Err(DatasetError::DuplicateLabel {
                    dimension,
                    lang,
                    label: label.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn validate_prices(catalog: &Catalog, prices: &PriceTable) -> DatasetResult<()> {
    let known = |dimension: Dimension, key: &str| {
        catalog
            .category(dimension)
            .entries()
            .iter()
            .any(|e| e.key == key)
    };

    for (item, region, month, value) in prices.iter() {
        for (dimension, key) in [
            (Dimension::Item, item),
            (Dimension::Region, region),
            (Dimension::Month, month),
        ] {
            if !known(dimension, key) {
                return Err(DatasetError::UnknownKey {
                    dimension,
                    key: key.to_string(),
                });
            }
        }
        if !value.is_finite() || value < 0.0 {
            return Err(DatasetError::InvalidPrice {
                item: item.to_string(),
                region: region.to_string(),
                month: month.to_string(),
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "source": {
            "title": {"en": "Prices", "fr": "Prix"},
            "period": {"en": "Q1", "fr": "T1"},
            "url": "https://example.org"
        },
        "items": [{"key": "milk", "en": "Milk", "fr": "Lait"}],
        "regions": [{"key": "ON", "en": "Ontario", "fr": "Ontario"}],
        "months": [
            {"key": "jan", "en": "Jan", "fr": "janv."},
            {"key": "feb", "en": "Feb", "fr": "févr."}
        ],
        "prices": {"milk": {"ON": {"jan": 4.5}}}
    }"#;

    #[test]
    fn parses_small_document() {
        let ds = Dataset::from_json(SMALL).unwrap();
        assert_eq!(ds.catalog.months.labels(Lang::Fr), vec!["janv.", "févr."]);
        assert_eq!(ds.source.title.get(Lang::Fr), "Prix");
        assert_eq!(ds.price(Lang::En, "Milk", "Ontario", "Jan"), Some(4.5));
        assert_eq!(ds.price(Lang::Fr, "Lait", "Ontario", "janv."), Some(4.5));
        assert_eq!(ds.price(Lang::En, "Milk", "Ontario", "Feb"), None);
    }

    #[test]
    fn price_labels_must_match_language() {
        let ds = Dataset::from_json(SMALL).unwrap();
        assert_eq!(ds.price(Lang::En, "Lait", "Ontario", "Jan"), None);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Dataset::from_json("{").unwrap_err();
        assert!(matches!(err, DatasetError::Malformed(_)));
    }

    #[test]
    fn rejects_unknown_price_keys() {
        let json = SMALL.replace(r#""ON": {"jan""#, r#""QC": {"jan""#);
        let err = Dataset::from_json(&json).unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnknownKey {
                dimension: Dimension::Region,
                key: "QC".to_string()
            }
        );
    }

    #[test]
    fn rejects_negative_prices() {
        let json = SMALL.replace("4.5", "-1.0");
        let err = Dataset::from_json(&json).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPrice { value, .. } if value == -1.0));
    }

    #[test]
    fn rejects_empty_and_duplicate_entries() {
        let source = SourceInfo {
            title: Localized {
                en: String::new(),
                fr: String::new(),
            },
            period: Localized {
                en: String::new(),
                fr: String::new(),
            },
            url: String::new(),
        };
        let one = Category::new(vec![CatalogEntry::new("a", "A", "A")]);

        let empty = Catalog {
            items: Category::default(),
            regions: one.clone(),
            months: one.clone(),
        };
        assert_eq!(
            Dataset::new(source.clone(), empty, PriceTable::default()).unwrap_err(),
            DatasetError::EmptyCategory {
                dimension: Dimension::Item
            }
        );

        let dup_key = Catalog {
            items: Category::new(vec![
                CatalogEntry::new("a", "A", "A"),
                CatalogEntry::new("a", "B", "B"),
            ]),
            regions: one.clone(),
            months: one.clone(),
        };
        assert!(matches!(
            Dataset::new(source.clone(), dup_key, PriceTable::default()),
            Err(DatasetError::DuplicateKey { .. })
        ));

        let dup_label = Catalog {
            items: one.clone(),
            regions: Category::new(vec![
                CatalogEntry::new("x", "X", "Même"),
                CatalogEntry::new("y", "Y", "Même"),
            ]),
            months: one,
        };
        assert_eq!(
            Dataset::new(source, dup_label, PriceTable::default()).unwrap_err(),
            DatasetError::DuplicateLabel {
                dimension: Dimension::Region,
                lang: Lang::Fr,
                label: "Même".to_string()
            }
        );
    }
}
