//! This crate contains all shared UI for the workspace.

mod chart;

mod charts;
pub use charts::{BarChart, LineChart};

mod panel;
pub use panel::{DatasetRef, LabelSelect, PanelHeader};

mod trend_panel;
pub use trend_panel::PriceTrendPanel;

mod comparison_panel;
pub use comparison_panel::PriceComparisonPanel;

mod dashboard;
pub use dashboard::{Dashboard, NotFound};

mod theme;
pub use theme::DashboardTheme;

mod i18n;
pub use i18n::{t, Lang};
