use chrono::Datelike;
use core_types::SalesDataset;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;

/// Featured item used when the dataset offers nothing to pick from.
pub const FALLBACK_FEATURED: &str = "Roasted Chicken";

/// Weekday index of Saturday (ISO, Monday = 0).
const SATURDAY: u32 = 5;

/// Picks the item with the highest aggregate revenue as the featured item.
///
/// Ties break by first encounter order in the dataset. An empty dataset
/// yields the fixed fallback name.
pub fn featured_item(dataset: &SalesDataset) -> String {
    let mut revenue: HashMap<&str, Decimal> = HashMap::new();
    let mut encounter_order: Vec<&str> = Vec::new();
    for record in dataset {
        let item = record.item_name.as_str();
        if !revenue.contains_key(item) {
            encounter_order.push(item);
        }
        *revenue.entry(item).or_default() += record.revenue;
    }

    let mut best: Option<(&str, Decimal)> = None;
    for item in encounter_order {
        let total = revenue[item];
        if best.is_none_or(|(_, best_total)| total > best_total) {
            best = Some((item, total));
        }
    }

    match best {
        Some((item, _)) => item.to_string(),
        None => FALLBACK_FEATURED.to_string(),
    }
}

/// The item with the highest total quantity sold, with that quantity.
/// `None` when the dataset is empty.
pub fn top_seller_by_quantity(dataset: &SalesDataset) -> Option<(String, i64)> {
    quantity_leader(dataset)
}

/// The item with the highest weekend (Saturday/Sunday) quantity.
///
/// When the dataset has no weekend rows at all, the overall top seller
/// stands in, so the weekend promo always has a subject.
pub fn weekend_top_item(dataset: &SalesDataset) -> Option<String> {
    let weekend_records: Vec<_> = dataset
        .iter()
        .filter(|r| r.date.weekday().num_days_from_monday() >= SATURDAY)
        .cloned()
        .collect();

    if weekend_records.is_empty() {
        info!("No weekend data available, using overall top seller");
        return quantity_leader(dataset).map(|(item, _)| item);
    }

    quantity_leader(&SalesDataset::new(weekend_records)).map(|(item, _)| item)
}

/// Highest total quantity, alphabetical first on ties.
fn quantity_leader(dataset: &SalesDataset) -> Option<(String, i64)> {
    let mut by_item: std::collections::BTreeMap<&str, i64> = std::collections::BTreeMap::new();
    for record in dataset {
        *by_item.entry(record.item_name.as_str()).or_default() += record.quantity;
    }

    let mut best: Option<(&str, i64)> = None;
    for (&item, &qty) in &by_item {
        if best.is_none_or(|(_, best_qty)| qty > best_qty) {
            best = Some((item, qty));
        }
    }
    best.map(|(item, qty)| (item.to_string(), qty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::SalesRecord;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(date: &str, item: &str, qty: i64, price: Decimal) -> SalesRecord {
        SalesRecord::new(d(date), item, "Mains", qty, price)
    }

    #[test]
    fn empty_dataset_falls_back_to_fixed_item() {
        assert_eq!(featured_item(&SalesDataset::empty()), FALLBACK_FEATURED);
        assert_eq!(top_seller_by_quantity(&SalesDataset::empty()), None);
        assert_eq!(weekend_top_item(&SalesDataset::empty()), None);
    }

    #[test]
    fn featured_item_is_highest_revenue() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Cevapi", 4, dec!(7.0)),
            record("2026-02-16", "Sarma", 20, dec!(5.0)),
        ]);
        assert_eq!(featured_item(&ds), "Sarma");
    }

    #[test]
    fn featured_item_tie_breaks_by_encounter_order() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Zito", 10, dec!(5.0)),
            record("2026-02-16", "Ajvar", 10, dec!(5.0)),
        ]);
        // Both total 50.0; Zito was seen first.
        assert_eq!(featured_item(&ds), "Zito");
    }

    #[test]
    fn top_seller_counts_quantity_not_revenue() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Rakija", 2, dec!(20.0)),
            record("2026-02-16", "Somun", 15, dec!(1.0)),
        ]);
        assert_eq!(top_seller_by_quantity(&ds), Some(("Somun".to_string(), 15)));
    }

    #[test]
    fn weekend_top_item_prefers_weekend_rows() {
        // 2026-02-16 is a Monday, 2026-02-21 a Saturday.
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 30, dec!(5.0)),
            record("2026-02-21", "Cevapi", 5, dec!(7.0)),
        ]);
        assert_eq!(weekend_top_item(&ds), Some("Cevapi".to_string()));
    }

    #[test]
    fn weekend_top_item_falls_back_to_overall_leader() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 30, dec!(5.0)),
            record("2026-02-17", "Cevapi", 5, dec!(7.0)),
        ]);
        assert_eq!(weekend_top_item(&ds), Some("Sarma".to_string()));
    }
}
