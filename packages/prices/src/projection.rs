use serde::Serialize;

use crate::dataset::Dataset;
use crate::types::Lang;

/// One chart dataset: a caption, category labels and one value per label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub caption: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Month-indexed prices for one item in one region. Missing entries are 0.
pub fn project_trend(dataset: &Dataset, lang: Lang, item: &str, region: &str) -> ChartSeries {
    let catalog = &dataset.catalog;
    let item_key = catalog.items.key_of(lang, item);
    let region_key = catalog.regions.key_of(lang, region);

    let (labels, values) = catalog
        .months
        .entries()
        .iter()
        .map(|month| {
            let price = item_key
                .zip(region_key)
                .and_then(|(item, region)| dataset.prices.get(item, region, &month.key));
            (month.label(lang).to_string(), price.unwrap_or(0.0))
        })
        .unzip();

    ChartSeries {
        caption: format!("{item} - {region}"),
        labels,
        values,
    }
}

/// Item-indexed prices in one region for one month. Missing entries are 0.
pub fn project_comparison(
    dataset: &Dataset,
    lang: Lang,
    region: &str,
    month: &str,
) -> ChartSeries {
    let catalog = &dataset.catalog;
    let region_key = catalog.regions.key_of(lang, region);
    let month_key = catalog.months.key_of(lang, month);

    let (labels, values) = catalog
        .items
        .entries()
        .iter()
        .map(|item| {
            let price = region_key
                .zip(month_key)
                .and_then(|(region, month)| dataset.prices.get(&item.key, region, month));
            (item.label(lang).to_string(), price.unwrap_or(0.0))
        })
        .unzip();

    let price_word = match lang {
        Lang::En => "Price",
        Lang::Fr => "Prix",
    };
    ChartSeries {
        caption: format!("{price_word} - {region} - {month}"),
        labels,
        values,
    }
}
