use crate::error::AnalyticsError;
use crate::report::WeeklyReport;
use core_types::SalesDataset;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

/// A stateless calculator for deriving weekly metrics from sales activity.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating weekly metrics.
    ///
    /// # Arguments
    ///
    /// * `current` - The target week's sales records.
    /// * `previous` - The records of the 7 days before the target week,
    ///   used only for comparison.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `WeeklyReport` or an `AnalyticsError`.
    /// An empty current window yields the zeroed report with "N/A" items.
    pub fn calculate(
        &self,
        current: &SalesDataset,
        previous: &SalesDataset,
    ) -> Result<WeeklyReport, AnalyticsError> {
        let mut report = WeeklyReport::new();

        if current.is_empty() {
            return Ok(report);
        }

        self.calculate_totals(current, &mut report);
        self.calculate_week_over_week(current, previous, &mut report)?;
        self.calculate_item_extremes(current, &mut report);
        self.calculate_rising_star(current, previous, &mut report)?;

        report.start_date = current.min_date();
        report.end_date = current.max_date();

        Ok(report)
    }

    /// Revenue and quantity totals plus the per-day average.
    fn calculate_totals(&self, current: &SalesDataset, report: &mut WeeklyReport) {
        report.total_revenue = current.total_revenue();
        report.total_quantity = current.total_quantity();

        // distinct_days is at least 1 here because `current` is non-empty,
        // but the floor keeps the division total for any input.
        let days = current.distinct_days().max(1);
        report.avg_daily_revenue = report.total_revenue / Decimal::from(days as u64);
    }

    /// Percentage change of total revenue against the previous window.
    ///
    /// A zero or negative previous total has no meaningful baseline, so the
    /// change is reported as 0 rather than a division blow-up.
    fn calculate_week_over_week(
        &self,
        current: &SalesDataset,
        previous: &SalesDataset,
        report: &mut WeeklyReport,
    ) -> Result<(), AnalyticsError> {
        let prev_revenue = previous.total_revenue();
        if prev_revenue <= Decimal::ZERO {
            report.wow_change_pct = Decimal::ZERO;
            return Ok(());
        }

        let delta = current.total_revenue() - prev_revenue;
        report.wow_change_pct = delta
            .checked_div(prev_revenue)
            .ok_or_else(|| AnalyticsError::DivisionByZero("week_over_week".to_string()))?
            * Decimal::from(100);

        Ok(())
    }

    /// Top seller and slow mover by per-item revenue within the current
    /// window. Ties resolve to the alphabetically first item.
    fn calculate_item_extremes(&self, current: &SalesDataset, report: &mut WeeklyReport) {
        let by_item = revenue_by_item(current);

        let mut top: Option<(&str, Decimal)> = None;
        let mut bottom: Option<(&str, Decimal)> = None;
        for (&item, &revenue) in &by_item {
            if top.is_none_or(|(_, best)| revenue > best) {
                top = Some((item, revenue));
            }
            if bottom.is_none_or(|(_, worst)| revenue < worst) {
                bottom = Some((item, revenue));
            }
        }

        if let Some((item, _)) = top {
            report.top_seller = item.to_string();
        }
        if let Some((item, _)) = bottom {
            report.slow_mover = item.to_string();
        }
    }

    /// The item with the largest week-over-week revenue change, computed
    /// over the union of items appearing in either window.
    ///
    /// An item absent from the previous window has no baseline; its change
    /// is 0 rather than infinite. Ties resolve to the alphabetically first
    /// item.
    fn calculate_rising_star(
        &self,
        current: &SalesDataset,
        previous: &SalesDataset,
        report: &mut WeeklyReport,
    ) -> Result<(), AnalyticsError> {
        let curr_items = revenue_by_item(current);
        let prev_items = revenue_by_item(previous);

        let all_items: BTreeSet<&str> = curr_items
            .keys()
            .chain(prev_items.keys())
            .copied()
            .collect();

        let mut best: Option<(&str, Decimal)> = None;
        for item in all_items {
            let curr = curr_items.get(item).copied().unwrap_or(Decimal::ZERO);
            let prev = prev_items.get(item).copied().unwrap_or(Decimal::ZERO);

            let change_pct = if prev > Decimal::ZERO {
                (curr - prev)
                    .checked_div(prev)
                    .ok_or_else(|| AnalyticsError::DivisionByZero("rising_star".to_string()))?
                    * Decimal::from(100)
            } else {
                Decimal::ZERO
            };

            if best.is_none_or(|(_, best_pct)| change_pct > best_pct) {
                best = Some((item, change_pct));
            }
        }

        if let Some((item, pct)) = best {
            report.rising_star = item.to_string();
            report.rising_star_pct = pct;
        }

        Ok(())
    }
}

/// Revenue summed per item name, in alphabetical item order.
fn revenue_by_item(dataset: &SalesDataset) -> BTreeMap<&str, Decimal> {
    let mut by_item: BTreeMap<&str, Decimal> = BTreeMap::new();
    for record in dataset {
        *by_item.entry(record.item_name.as_str()).or_default() += record.revenue;
    }
    by_item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NO_ITEM;
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
    fn empty_current_window_yields_zeroed_report() {
        let report = MetricsEngine::new()
            .calculate(&SalesDataset::empty(), &SalesDataset::empty())
            .unwrap();
        assert_eq!(report.total_revenue, Decimal::ZERO);
        assert_eq!(report.top_seller, NO_ITEM);
        assert_eq!(report.start_date, None);
    }

    #[test]
    fn totals_and_daily_average() {
        let current = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 10, dec!(5.0)),
            record("2026-02-17", "Cevapi", 4, dec!(7.5)),
        ]);
        let report = MetricsEngine::new()
            .calculate(&current, &SalesDataset::empty())
            .unwrap();
        assert_eq!(report.total_revenue, dec!(80.0));
        assert_eq!(report.total_quantity, 14);
        assert_eq!(report.avg_daily_revenue, dec!(40.0));
        assert_eq!(report.start_date, Some(d("2026-02-16")));
        assert_eq!(report.end_date, Some(d("2026-02-17")));
    }

    #[test]
    fn wow_change_is_zero_for_zero_baseline() {
        let current = SalesDataset::new(vec![record("2026-02-16", "Sarma", 20, dec!(5.0))]);
        let report = MetricsEngine::new()
            .calculate(&current, &SalesDataset::empty())
            .unwrap();
        // Previous revenue of 0 must not produce an infinite ratio.
        assert_eq!(report.wow_change_pct, Decimal::ZERO);
    }

    #[test]
    fn wow_change_against_positive_baseline() {
        let current = SalesDataset::new(vec![record("2026-02-16", "Sarma", 30, dec!(5.0))]);
        let previous = SalesDataset::new(vec![record("2026-02-09", "Sarma", 20, dec!(5.0))]);
        let report = MetricsEngine::new().calculate(&current, &previous).unwrap();
        assert_eq!(report.wow_change_pct, dec!(50));
    }

    #[test]
    fn top_seller_and_slow_mover() {
        let current = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 10, dec!(5.0)),
            record("2026-02-16", "Baklava", 2, dec!(3.0)),
            record("2026-02-17", "Cevapi", 6, dec!(7.0)),
        ]);
        let report = MetricsEngine::new()
            .calculate(&current, &SalesDataset::empty())
            .unwrap();
        assert_eq!(report.top_seller, "Sarma");
        assert_eq!(report.slow_mover, "Baklava");
    }

    #[test]
    fn rising_star_ignores_zero_baseline_items() {
        // Cevapi doubles week over week; Sarma is new and has no baseline,
        // so its change counts as 0 instead of infinity.
        let current = SalesDataset::new(vec![
            record("2026-02-16", "Cevapi", 20, dec!(7.0)),
            record("2026-02-16", "Sarma", 50, dec!(5.0)),
        ]);
        let previous = SalesDataset::new(vec![record("2026-02-09", "Cevapi", 10, dec!(7.0))]);
        let report = MetricsEngine::new().calculate(&current, &previous).unwrap();
        assert_eq!(report.rising_star, "Cevapi");
        assert_eq!(report.rising_star_pct, dec!(100));
    }

    #[test]
    fn identical_inputs_yield_identical_reports() {
        let current = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 10, dec!(5.0)),
            record("2026-02-18", "Cevapi", 4, dec!(7.5)),
        ]);
        let previous = SalesDataset::new(vec![record("2026-02-10", "Sarma", 8, dec!(5.0))]);
        let engine = MetricsEngine::new();
        let a = engine.calculate(&current, &previous).unwrap();
        let b = engine.calculate(&current, &previous).unwrap();
        assert_eq!(a, b);
    }
}
