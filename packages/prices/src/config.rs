use crate::types::Lang;

/// Startup options for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Language of the page header and footer.
    pub page_lang: Lang,
    pub trend_lang: Lang,
    pub comparison_lang: Lang,
}

impl DashboardConfig {
    /// Read `DASHBOARD_LANG` (page and both panels), then the per-panel
    /// `DASHBOARD_TREND_LANG` and `DASHBOARD_COMPARISON_LANG` overrides.
    /// Unknown values mean English.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lang_of = |key: &str| lookup(key).and_then(|v| Lang::from_code(&v));
        let base = lang_of("DASHBOARD_LANG").unwrap_or_default();
        Self {
            page_lang: base,
            trend_lang: lang_of("DASHBOARD_TREND_LANG").unwrap_or(base),
            comparison_lang: lang_of("DASHBOARD_COMPARISON_LANG").unwrap_or(base),
        }
    }
}
