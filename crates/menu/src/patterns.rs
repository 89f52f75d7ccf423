use chrono::Datelike;
use core_types::SalesDataset;
use serde::Serialize;
use std::collections::BTreeMap;

/// Weekday indices counted as the weekend (ISO, Monday = 0).
pub const WEEKEND_DAYS: [usize; 2] = [5, 6];

/// Quantity sold per item per day of week, as a dense item x weekday grid.
///
/// `observed_days` records which weekdays actually occur in the source rows;
/// averages over the grid are taken across observed columns only, so the
/// dense representation behaves like a sparse pivot of the raw data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayPatternTable {
    pub items: Vec<String>,
    /// One row of 7 weekday sums per entry in `items`, Monday first.
    pub grid: Vec<[i64; 7]>,
    pub observed_days: [bool; 7],
}

impl DayPatternTable {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any Saturday or Sunday appears in the source data.
    pub fn has_weekend_data(&self) -> bool {
        WEEKEND_DAYS.iter().any(|d| self.observed_days[*d])
    }

    /// Whether any Monday..Friday appears in the source data.
    pub fn has_weekday_data(&self) -> bool {
        (0..7)
            .filter(|d| !WEEKEND_DAYS.contains(d))
            .any(|d| self.observed_days[d])
    }

    /// The grid row for an item, if present.
    pub fn row(&self, item: &str) -> Option<&[i64; 7]> {
        self.items
            .iter()
            .position(|i| i == item)
            .map(|idx| &self.grid[idx])
    }
}

/// Sums quantities per (item, day-of-week) into a dense grid.
///
/// Items appear in alphabetical order; combinations with no sales hold 0.
pub fn analyze_day_patterns(dataset: &SalesDataset) -> DayPatternTable {
    if dataset.is_empty() {
        return DayPatternTable::default();
    }

    let mut observed_days = [false; 7];
    let mut by_item: BTreeMap<&str, [i64; 7]> = BTreeMap::new();
    for record in dataset {
        let day = record.date.weekday().num_days_from_monday() as usize;
        observed_days[day] = true;
        by_item.entry(record.item_name.as_str()).or_default()[day] += record.quantity;
    }

    let (items, grid) = by_item
        .into_iter()
        .map(|(item, row)| (item.to_string(), row))
        .unzip();

    DayPatternTable {
        items,
        grid,
        observed_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use core_types::SalesRecord;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(date: &str, item: &str, qty: i64) -> SalesRecord {
        SalesRecord::new(d(date), item, "Mains", qty, dec!(5))
    }

    #[test]
    fn empty_dataset_gives_empty_grid() {
        let table = analyze_day_patterns(&SalesDataset::empty());
        assert!(table.is_empty());
        assert!(!table.has_weekend_data());
    }

    #[test]
    fn sums_quantities_into_weekday_cells() {
        // 2026-02-16 is a Monday, 2026-02-21 a Saturday.
        assert_eq!(d("2026-02-16").weekday().num_days_from_monday(), 0);
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 3),
            record("2026-02-16", "Sarma", 2),
            record("2026-02-21", "Sarma", 7),
            record("2026-02-21", "Cevapi", 1),
        ]);
        let table = analyze_day_patterns(&ds);
        assert_eq!(table.items, vec!["Cevapi".to_string(), "Sarma".to_string()]);
        let sarma = table.row("Sarma").unwrap();
        assert_eq!(sarma[0], 5);
        assert_eq!(sarma[5], 7);
        assert_eq!(sarma[1], 0);
        assert!(table.has_weekend_data());
        assert!(table.has_weekday_data());
    }

    #[test]
    fn observed_days_track_only_present_weekdays() {
        let ds = SalesDataset::new(vec![record("2026-02-21", "Sarma", 7)]);
        let table = analyze_day_patterns(&ds);
        assert!(table.has_weekend_data());
        assert!(!table.has_weekday_data());
    }
}
