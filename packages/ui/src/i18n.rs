pub use prices::Lang;

/// Translate a UI string for a given language. English falls back to French,
/// French falls back to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Page
        (Lang::En, "page.title") => "Household Item Price Trends in Canada".to_string(),
        (Lang::Fr, "page.title") => "Tendances des prix des articles ménagers au Canada".to_string(),
        (Lang::En, "page.description") => "Explore average retail prices of common household items across Canada".to_string(),
        (Lang::Fr, "page.description") => "Explorez les prix de détail moyens d'articles ménagers courants partout au Canada".to_string(),
        (Lang::En, "page.source") => "Data source:".to_string(),
        (Lang::Fr, "page.source") => "Source des données :".to_string(),
        (Lang::En, "page.source_link") => "Government of Canada Open Data Portal".to_string(),
        (Lang::Fr, "page.source_link") => "Portail du gouvernement ouvert du Canada".to_string(),
        (Lang::En, "page.not_found") => "Page not found".to_string(),
        (Lang::Fr, "page.not_found") => "Page introuvable".to_string(),
        (Lang::En, "page.back_home") => "Back to the dashboard".to_string(),
        (Lang::Fr, "page.back_home") => "Retour au tableau de bord".to_string(),

        // Panel chrome
        (Lang::En, "panel.about") => "About".to_string(),
        (Lang::Fr, "panel.about") => "À propos".to_string(),
        (Lang::En, "panel.toggle_aria") => "Toggle language for".to_string(),
        (Lang::Fr, "panel.toggle_aria") => "Changer la langue de".to_string(),
        (Lang::En, "panel.about_aria") => "About".to_string(),
        (Lang::Fr, "panel.about_aria") => "À propos de".to_string(),

        // Trend panel
        (Lang::En, "trend.title") => "Price Trends Over Time".to_string(),
        (Lang::Fr, "trend.title") => "Tendances des prix au fil du temps".to_string(),
        (Lang::En, "trend.about") => "View the price of an item over time in a selected province.".to_string(),
        (Lang::Fr, "trend.about") => "Voir le prix d'un article au fil du temps dans une province sélectionnée.".to_string(),

        // Comparison panel
        (Lang::En, "comparison.title") => "Price Comparison by Product".to_string(),
        (Lang::Fr, "comparison.title") => "Comparaison des prix par produit".to_string(),
        (Lang::En, "comparison.about") => "Compare item prices in a selected province and month.".to_string(),
        (Lang::Fr, "comparison.about") => "Comparer les prix des articles dans une province et un mois sélectionnés.".to_string(),

        // Filters
        (Lang::En, "filter.item") => "Item".to_string(),
        (Lang::Fr, "filter.item") => "Article".to_string(),
        (Lang::En, "filter.region") => "Province or territory".to_string(),
        (Lang::Fr, "filter.region") => "Province ou territoire".to_string(),
        (Lang::En, "filter.month") => "Month".to_string(),
        (Lang::Fr, "filter.month") => "Mois".to_string(),

        // Common
        (Lang::En, "common.error_prefix") => "Error:".to_string(),
        (Lang::Fr, "common.error_prefix") => "Erreur :".to_string(),
        (Lang::Fr, "common.no_data") => "Aucune donnée".to_string(),

        // Fallback: use French string if present, else show key.
        (Lang::En, k) => t(Lang::Fr, k),
        (Lang::Fr, _) => key.to_string(),
    }
}
