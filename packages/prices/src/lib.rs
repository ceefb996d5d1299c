//! This crate contains the platform-independent dashboard core: the bundled
//! price dataset, bilingual catalog, panel selection state, chart projections
//! and currency formatting.

pub mod catalog;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod error;
pub mod projection;
pub mod selection;
pub mod table;
pub mod types;


#[cfg(test)]
mod selection_tests;

pub use catalog::{Catalog, CatalogEntry, Category};
pub use config::DashboardConfig;
pub use currency::format_cad;
pub use dataset::{bundled, Dataset, SourceInfo};
pub use error::{DatasetError, DatasetResult};
pub use projection::{project_comparison, project_trend, ChartSeries};
pub use selection::{PanelEvent, PanelState, Selection};
pub use table::PriceTable;
pub use types::{Dimension, Lang, Localized};
