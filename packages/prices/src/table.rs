use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type MonthPrices = BTreeMap<String, f64>;
type RegionPrices = BTreeMap<String, MonthPrices>;

/// Prices keyed by canonical item, region and month keys.
///
/// Both display languages share one table; labels are resolved to keys
/// through the catalog before lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    by_item: BTreeMap<String, RegionPrices>,
}

impl PriceTable {
    pub fn get(&self, item: &str, region: &str, month: &str) -> Option<f64> {
        self.by_item.get(item)?.get(region)?.get(month).copied()
    }

    pub fn insert(
        &mut self,
        item: impl Into<String>,
        region: impl Into<String>,
        month: impl Into<String>,
        price: f64,
    ) {
        self.by_item
            .entry(item.into())
            .or_default()
            .entry(region.into())
            .or_default()
            .insert(month.into(), price);
    }

    /// Every `(item, region, month, price)` entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str, f64)> {
        self.by_item.iter().flat_map(|(item, regions)| {
            regions.iter().flat_map(move |(region, months)| {
                months
                    .iter()
                    .map(move |(month, price)| (item.as_str(), region.as_str(), month.as_str(), *price))
            })
        })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
