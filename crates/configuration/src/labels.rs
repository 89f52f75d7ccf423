//! Bilingual label tables for reports, charts, and recommendations.
//!
//! A pure lookup keyed by [`Language`]; renderers receive a `&'static Labels`
//! and never consult global state.

use core_types::{Language, RecommendationAction};

/// Every user-facing label the report and chart renderers need.
#[derive(Debug)]
pub struct Labels {
    pub weekly_title: &'static str,
    pub menu_title: &'static str,
    pub social_title: &'static str,
    pub total_revenue: &'static str,
    pub total_items_sold: &'static str,
    pub avg_daily_revenue: &'static str,
    pub top_seller: &'static str,
    pub slow_mover: &'static str,
    pub rising_star: &'static str,
    pub wow_change: &'static str,
    pub best_by_revenue: &'static str,
    pub worst_by_revenue: &'static str,
    pub category_breakdown: &'static str,
    pub recommendations: &'static str,
    pub promote: &'static str,
    pub discount: &'static str,
    pub remove: &'static str,
    pub daily_revenue: &'static str,
    pub revenue_by_category: &'static str,
    pub top_items: &'static str,
    pub heatmap_title: &'static str,
    pub date: &'static str,
    pub revenue: &'static str,
    pub quantity: &'static str,
    pub category: &'static str,
    pub item: &'static str,
    pub days_sold: &'static str,
    pub avg_price: &'static str,
    pub revenue_rank: &'static str,
    pub volume_rank: &'static str,
    pub item_count: &'static str,
    pub share: &'static str,
    pub no_data: &'static str,
}

const EN: Labels = Labels {
    weekly_title: "Weekly Sales Report",
    menu_title: "Menu Performance Analysis",
    social_title: "Social Media Content",
    total_revenue: "Total Revenue",
    total_items_sold: "Total Items Sold",
    avg_daily_revenue: "Avg Daily Revenue",
    top_seller: "Top Seller",
    slow_mover: "Slow Mover",
    rising_star: "Rising Star",
    wow_change: "Week-over-Week Change",
    best_by_revenue: "Best Performers (Revenue)",
    worst_by_revenue: "Worst Performers (Revenue)",
    category_breakdown: "Category Revenue Breakdown",
    recommendations: "Recommendations",
    promote: "PROMOTE",
    discount: "CONSIDER DISCOUNTING",
    remove: "CONSIDER REMOVING",
    daily_revenue: "Daily Revenue",
    revenue_by_category: "Revenue by Category",
    top_items: "Top Items by Revenue",
    heatmap_title: "Sales Heatmap: Items x Day of Week",
    date: "Date",
    revenue: "Revenue (EUR)",
    quantity: "Quantity",
    category: "Category",
    item: "Item",
    days_sold: "Days Sold",
    avg_price: "Avg Price",
    revenue_rank: "Rev Rank",
    volume_rank: "Vol Rank",
    item_count: "Items",
    share: "Share (%)",
    no_data: "No data available",
};

const SR: Labels = Labels {
    weekly_title: "Nedeljni Izveštaj Prodaje",
    menu_title: "Analiza Performansi Menija",
    social_title: "Sadržaj za Društvene Mreže",
    total_revenue: "Ukupan Prihod",
    total_items_sold: "Ukupno Prodatih Stavki",
    avg_daily_revenue: "Prosečan Dnevni Prihod",
    top_seller: "Najprodavaniji",
    slow_mover: "Najslabiji",
    rising_star: "Zvezda u Usponu",
    wow_change: "Promena u Odnosu na Prošlu Nedelju",
    best_by_revenue: "Najbolji po Prihodu",
    worst_by_revenue: "Najslabiji po Prihodu",
    category_breakdown: "Prihod po Kategoriji",
    recommendations: "Preporuke",
    promote: "PROMOVISATI",
    discount: "RAZMOTRITI POPUST",
    remove: "RAZMOTRITI UKLANJANJE",
    daily_revenue: "Dnevni Prihod",
    revenue_by_category: "Prihod po Kategoriji",
    top_items: "Top Stavke po Prihodu",
    heatmap_title: "Mapa Prodaje: Stavke x Dan u Nedelji",
    date: "Datum",
    revenue: "Prihod (EUR)",
    quantity: "Količina",
    category: "Kategorija",
    item: "Stavka",
    days_sold: "Dana u Prodaji",
    avg_price: "Prosečna Cena",
    revenue_rank: "Rang po Prihodu",
    volume_rank: "Rang po Obimu",
    item_count: "Broj Stavki",
    share: "Udeo (%)",
    no_data: "Nema dostupnih podataka",
};

const DAY_NAMES_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DAY_NAMES_SR: [&str; 7] = [
    "Ponedeljak",
    "Utorak",
    "Sreda",
    "Četvrtak",
    "Petak",
    "Subota",
    "Nedelja",
];

impl Labels {
    /// The label table for a language.
    pub fn for_language(lang: Language) -> &'static Labels {
        match lang {
            Language::En => &EN,
            Language::Sr => &SR,
        }
    }

    /// The display label for a recommendation action.
    pub fn action(&self, action: RecommendationAction) -> &'static str {
        match action {
            RecommendationAction::Promote => self.promote,
            RecommendationAction::Discount => self.discount,
            RecommendationAction::Remove => self.remove,
        }
    }
}

/// Weekday names indexed by the ISO weekday index (Monday = 0).
pub fn day_names(lang: Language) -> &'static [&'static str; 7] {
    match lang {
        Language::En => &DAY_NAMES_EN,
        Language::Sr => &DAY_NAMES_SR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_resolve() {
        assert_eq!(Labels::for_language(Language::En).weekly_title, "Weekly Sales Report");
        assert!(Labels::for_language(Language::Sr).weekly_title.contains("Nedeljni"));
    }

    #[test]
    fn action_labels_follow_language() {
        let sr = Labels::for_language(Language::Sr);
        assert_eq!(sr.action(core_types::RecommendationAction::Promote), "PROMOVISATI");
    }
}
