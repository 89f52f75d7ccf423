use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single sales line: one menu item sold on one date.
///
/// `revenue` is always derived from `quantity * unit_price` at construction
/// time; it is never taken on trust from an input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub item_name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub revenue: Decimal,
}

impl SalesRecord {
    /// Builds a record and computes its derived revenue.
    pub fn new(
        date: NaiveDate,
        item_name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Self {
        Self {
            date,
            item_name: item_name.into(),
            category: category.into(),
            quantity,
            unit_price,
            revenue: Decimal::from(quantity) * unit_price,
        }
    }
}

/// An ordered collection of sales records, immutable after load.
///
/// Every derived view (`filter_range`, the aggregations in the analytics and
/// menu crates) is a projection that copies what it needs; the source records
/// are never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// An empty dataset, the universal "no data" degraded-mode value.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// The latest date present, or `None` when empty.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }

    /// The earliest date present, or `None` when empty.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    /// Number of distinct calendar days with at least one record.
    pub fn distinct_days(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.date)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Records with `start <= date <= end`, as a new dataset.
    pub fn filter_range(&self, start: NaiveDate, end: NaiveDate) -> SalesDataset {
        let records = self
            .records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect();
        SalesDataset::new(records)
    }

    pub fn total_revenue(&self) -> Decimal {
        self.records.iter().map(|r| r.revenue).sum()
    }

    pub fn total_quantity(&self) -> i64 {
        self.records.iter().map(|r| r.quantity).sum()
    }
}

impl<'a> IntoIterator for &'a SalesDataset {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn revenue_is_derived_from_quantity_and_price() {
        let r = SalesRecord::new(d("2026-02-16"), "Sarma", "Mains", 10, dec!(5.0));
        assert_eq!(r.revenue, dec!(50.0));
    }

    #[test]
    fn filter_range_is_inclusive_on_both_ends() {
        let ds = SalesDataset::new(vec![
            SalesRecord::new(d("2026-02-15"), "Sarma", "Mains", 1, dec!(5)),
            SalesRecord::new(d("2026-02-16"), "Sarma", "Mains", 1, dec!(5)),
            SalesRecord::new(d("2026-02-17"), "Sarma", "Mains", 1, dec!(5)),
        ]);
        let filtered = ds.filter_range(d("2026-02-15"), d("2026-02-16"));
        assert_eq!(filtered.len(), 2);
        // The source dataset is untouched.
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn distinct_days_counts_unique_dates() {
        let ds = SalesDataset::new(vec![
            SalesRecord::new(d("2026-02-16"), "Sarma", "Mains", 1, dec!(5)),
            SalesRecord::new(d("2026-02-16"), "Cevapi", "Grill", 2, dec!(7)),
            SalesRecord::new(d("2026-02-17"), "Sarma", "Mains", 1, dec!(5)),
        ]);
        assert_eq!(ds.distinct_days(), 2);
        assert_eq!(ds.max_date(), Some(d("2026-02-17")));
    }
}
