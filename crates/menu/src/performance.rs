use chrono::NaiveDate;
use core_types::SalesDataset;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregate performance of one menu item over a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPerformance {
    pub item_name: String,
    pub total_revenue: Decimal,
    pub total_quantity: i64,
    /// Arithmetic mean of the item's row prices, not quantity-weighted.
    pub avg_unit_price: Decimal,
    pub distinct_days_sold: usize,
    /// Competition rank by revenue: 1 is best, ties share a rank.
    pub revenue_rank: usize,
    /// Competition rank by quantity, independent of the revenue rank.
    pub volume_rank: usize,
}

#[derive(Default)]
struct ItemAccumulator {
    revenue: Decimal,
    quantity: i64,
    price_sum: Decimal,
    row_count: u64,
    days: BTreeSet<NaiveDate>,
}

/// Ranks menu items by revenue and quantity sold.
///
/// One row per distinct item, sorted by total revenue descending (ties in
/// alphabetical item order, so the output is stable). Ranks use standard
/// competition ranking: equal values receive equal rank, and the next
/// distinct value resumes at the count of strictly better items plus one.
pub fn analyze_item_performance(dataset: &SalesDataset) -> Vec<ItemPerformance> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let mut by_item: BTreeMap<&str, ItemAccumulator> = BTreeMap::new();
    for record in dataset {
        let acc = by_item.entry(record.item_name.as_str()).or_default();
        acc.revenue += record.revenue;
        acc.quantity += record.quantity;
        acc.price_sum += record.unit_price;
        acc.row_count += 1;
        acc.days.insert(record.date);
    }

    let mut rows: Vec<ItemPerformance> = by_item
        .into_iter()
        .map(|(item, acc)| ItemPerformance {
            item_name: item.to_string(),
            total_revenue: acc.revenue,
            total_quantity: acc.quantity,
            // row_count >= 1 for any item that made it into the map.
            avg_unit_price: acc.price_sum / Decimal::from(acc.row_count),
            distinct_days_sold: acc.days.len(),
            revenue_rank: 0,
            volume_rank: 0,
        })
        .collect();

    // BTreeMap iteration is alphabetical, and the sort is stable, so ties
    // keep alphabetical order.
    rows.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));

    let revenues: Vec<Decimal> = rows.iter().map(|r| r.total_revenue).collect();
    let volumes: Vec<i64> = rows.iter().map(|r| r.total_quantity).collect();
    for row in &mut rows {
        row.revenue_rank = competition_rank(&revenues, &row.total_revenue);
        row.volume_rank = competition_rank(&volumes, &row.total_quantity);
    }

    rows
}

/// Standard competition rank of `value` within `all`: one more than the
/// number of strictly greater values.
fn competition_rank<T: PartialOrd>(all: &[T], value: &T) -> usize {
    all.iter().filter(|v| *v > value).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::SalesRecord;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(date: &str, item: &str, qty: i64, price: Decimal) -> SalesRecord {
        SalesRecord::new(d(date), item, "Mains", qty, price)
    }

    #[test]
    fn empty_dataset_gives_empty_table() {
        assert!(analyze_item_performance(&SalesDataset::empty()).is_empty());
    }

    #[test]
    fn aggregates_one_row_per_item_sorted_by_revenue() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 10, dec!(5.0)),
            record("2026-02-17", "Sarma", 6, dec!(6.0)),
            record("2026-02-16", "Cevapi", 4, dec!(7.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        assert_eq!(perf.len(), 2);
        assert_eq!(perf[0].item_name, "Sarma");
        assert_eq!(perf[0].total_revenue, dec!(86.0));
        assert_eq!(perf[0].total_quantity, 16);
        assert_eq!(perf[0].avg_unit_price, dec!(5.5));
        assert_eq!(perf[0].distinct_days_sold, 2);
        assert_eq!(perf[1].item_name, "Cevapi");
    }

    #[test]
    fn revenue_conservation_under_grouping() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 10, dec!(5.0)),
            record("2026-02-16", "Cevapi", 4, dec!(7.0)),
            record("2026-02-18", "Baklava", 3, dec!(3.2)),
        ]);
        let perf = analyze_item_performance(&ds);
        let grouped: Decimal = perf.iter().map(|r| r.total_revenue).sum();
        assert_eq!(grouped, ds.total_revenue());
    }

    #[test]
    fn tied_revenues_share_a_rank() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 10, dec!(5.0)),
            record("2026-02-16", "Cevapi", 5, dec!(10.0)),
            record("2026-02-16", "Baklava", 1, dec!(3.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        // Sarma and Cevapi both brought in 50.0.
        assert_eq!(perf[0].revenue_rank, 1);
        assert_eq!(perf[1].revenue_rank, 1);
        assert_eq!(perf[2].revenue_rank, 3);
    }

    #[test]
    fn volume_rank_is_independent_of_revenue_rank() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Rakija", 2, dec!(20.0)),
            record("2026-02-16", "Sarma", 10, dec!(3.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        assert_eq!(perf[0].item_name, "Rakija");
        assert_eq!(perf[0].revenue_rank, 1);
        assert_eq!(perf[0].volume_rank, 2);
        assert_eq!(perf[1].volume_rank, 1);
    }
}
