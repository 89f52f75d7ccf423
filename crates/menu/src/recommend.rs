use crate::patterns::{DayPatternTable, WEEKEND_DAYS};
use crate::performance::ItemPerformance;
use configuration::RuleConfig;
use core_types::RecommendationAction;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// An actionable suggestion for one menu item. Ephemeral output; generated
/// per run and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub item_name: String,
    pub reason: String,
}

/// Applies the threshold rules over the ranked tables.
pub struct RecommendationEngine {
    config: RuleConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl RecommendationEngine {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Generates promote/discount/remove recommendations.
    ///
    /// Top and bottom tier sizes are both `max(1, item_count / 3)`, so with
    /// very few items one item can land in both tiers and collect two
    /// recommendations. That overlap is intended behavior, as is the
    /// weekend rule adding a second promote for an already promoted item.
    pub fn generate(
        &self,
        performance: &[ItemPerformance],
        patterns: &DayPatternTable,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        if performance.is_empty() {
            return recommendations;
        }

        let tier = (performance.len() / self.config.tier_divisor.max(1)).max(1);
        debug!(
            "Evaluating {} items with tier size {}",
            performance.len(),
            tier
        );

        // Top performers: promote.
        for row in &performance[..tier] {
            recommendations.push(Recommendation {
                action: RecommendationAction::Promote,
                item_name: row.item_name.clone(),
                reason: format!(
                    "Top revenue: EUR {:.2}, {} sold",
                    row.total_revenue, row.total_quantity
                ),
            });
        }

        // Bottom performers: remove when volume is far below the median,
        // otherwise discount.
        let volume_cutoff = median_quantity(performance) * self.config.remove_volume_factor;
        for row in &performance[performance.len() - tier..] {
            if Decimal::from(row.total_quantity) < volume_cutoff {
                recommendations.push(Recommendation {
                    action: RecommendationAction::Remove,
                    item_name: row.item_name.clone(),
                    reason: format!(
                        "Low volume ({}) and low revenue (EUR {:.2})",
                        row.total_quantity, row.total_revenue
                    ),
                });
            } else {
                recommendations.push(Recommendation {
                    action: RecommendationAction::Discount,
                    item_name: row.item_name.clone(),
                    reason: format!(
                        "Below average revenue (EUR {:.2}), decent volume ({})",
                        row.total_revenue, row.total_quantity
                    ),
                });
            }
        }

        self.weekend_skew(patterns, &mut recommendations);

        recommendations
    }

    /// Items selling disproportionately on weekends earn an extra promote.
    ///
    /// The rule only applies when the data contains both weekend and
    /// weekday observations; means are taken over observed days only.
    fn weekend_skew(&self, patterns: &DayPatternTable, out: &mut Vec<Recommendation>) {
        if patterns.is_empty() || !patterns.has_weekend_data() || !patterns.has_weekday_data() {
            return;
        }

        for (item, row) in patterns.items.iter().zip(&patterns.grid) {
            let weekend_mean = observed_mean(row, &patterns.observed_days, true);
            let weekday_mean = observed_mean(row, &patterns.observed_days, false);

            // A weekday mean of zero would blow the ratio up; substitute 1.
            let denominator = if weekday_mean.is_zero() {
                Decimal::ONE
            } else {
                weekday_mean
            };
            let ratio = weekend_mean / denominator;

            if ratio > self.config.weekend_ratio_threshold {
                out.push(Recommendation {
                    action: RecommendationAction::Promote,
                    item_name: item.clone(),
                    reason: format!(
                        "Sells {:.1}x more on weekends than weekdays",
                        ratio
                    ),
                });
            }
        }
    }
}

/// Median of the per-item quantities; the mean of the middle pair when the
/// item count is even.
fn median_quantity(performance: &[ItemPerformance]) -> Decimal {
    let mut quantities: Vec<i64> = performance.iter().map(|r| r.total_quantity).collect();
    quantities.sort_unstable();
    let n = quantities.len();
    if n % 2 == 1 {
        Decimal::from(quantities[n / 2])
    } else {
        Decimal::from(quantities[n / 2 - 1] + quantities[n / 2]) / Decimal::from(2)
    }
}

/// Mean quantity over the observed weekend or weekday columns of one row.
fn observed_mean(row: &[i64; 7], observed: &[bool; 7], weekend: bool) -> Decimal {
    let days: Vec<usize> = (0..7)
        .filter(|d| observed[*d] && WEEKEND_DAYS.contains(d) == weekend)
        .collect();
    if days.is_empty() {
        return Decimal::ZERO;
    }
    let sum: i64 = days.iter().map(|d| row[*d]).sum();
    Decimal::from(sum) / Decimal::from(days.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::analyze_day_patterns;
    use crate::performance::analyze_item_performance;
    use chrono::NaiveDate;
    use core_types::{SalesDataset, SalesRecord};
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(date: &str, item: &str, qty: i64, price: Decimal) -> SalesRecord {
        SalesRecord::new(d(date), item, "Mains", qty, price)
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::default()
    }

    #[test]
    fn empty_table_yields_no_recommendations() {
        let recs = engine().generate(&[], &DayPatternTable::default());
        assert!(recs.is_empty());
    }

    #[test]
    fn every_recommendation_references_a_known_item() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 30, dec!(5.0)),
            record("2026-02-16", "Cevapi", 20, dec!(7.0)),
            record("2026-02-17", "Baklava", 10, dec!(3.0)),
            record("2026-02-18", "Rakija", 2, dec!(4.0)),
            record("2026-02-18", "Kajmak", 1, dec!(2.0)),
            record("2026-02-19", "Somun", 25, dec!(1.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        let patterns = analyze_day_patterns(&ds);
        let recs = engine().generate(&perf, &patterns);
        assert!(!recs.is_empty());
        for rec in &recs {
            assert!(perf.iter().any(|row| row.item_name == rec.item_name));
        }
    }

    #[test]
    fn single_item_lands_in_both_tiers() {
        // One item is simultaneously the whole top and bottom tier. It is
        // promoted, and with a quantity equal to the median it cannot fall
        // under the removal cutoff, so the bottom tier yields a discount.
        let ds = SalesDataset::new(vec![record("2026-02-16", "Sarma", 10, dec!(5.0))]);
        let perf = analyze_item_performance(&ds);
        let recs = engine().generate(&perf, &analyze_day_patterns(&ds));
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].action, core_types::RecommendationAction::Promote);
        assert_eq!(recs[1].action, core_types::RecommendationAction::Discount);
        assert!(recs.iter().all(|r| r.item_name == "Sarma"));
    }

    #[test]
    fn far_below_median_volume_is_flagged_for_removal() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 30, dec!(5.0)),
            record("2026-02-16", "Cevapi", 20, dec!(7.0)),
            record("2026-02-17", "Baklava", 18, dec!(3.0)),
            record("2026-02-18", "Kajmak", 1, dec!(2.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        let recs = engine().generate(&perf, &analyze_day_patterns(&ds));
        // Median quantity is 19; Kajmak's 1 is far below half of it.
        let removal = recs
            .iter()
            .find(|r| r.action == core_types::RecommendationAction::Remove)
            .expect("expected a removal");
        assert_eq!(removal.item_name, "Kajmak");
    }

    #[test]
    fn weekend_heavy_items_get_an_extra_promote() {
        // 2026-02-16 is a Monday, 2026-02-21 a Saturday. Rakija sells 1 on
        // the weekday and 10 on the weekend.
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Rakija", 1, dec!(4.0)),
            record("2026-02-21", "Rakija", 10, dec!(4.0)),
            record("2026-02-16", "Sarma", 10, dec!(5.0)),
            record("2026-02-21", "Sarma", 8, dec!(5.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        let recs = engine().generate(&perf, &analyze_day_patterns(&ds));
        let weekend_promotes: Vec<_> = recs
            .iter()
            .filter(|r| r.reason.contains("weekends"))
            .collect();
        assert_eq!(weekend_promotes.len(), 1);
        assert_eq!(weekend_promotes[0].item_name, "Rakija");
        assert_eq!(weekend_promotes[0].action, core_types::RecommendationAction::Promote);
    }

    #[test]
    fn weekend_rule_is_inactive_without_weekend_data() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Rakija", 1, dec!(4.0)),
            record("2026-02-17", "Sarma", 10, dec!(5.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        let recs = engine().generate(&perf, &analyze_day_patterns(&ds));
        assert!(recs.iter().all(|r| !r.reason.contains("weekends")));
    }

    #[test]
    fn actions_come_from_the_known_set() {
        let ds = SalesDataset::new(vec![
            record("2026-02-16", "Sarma", 30, dec!(5.0)),
            record("2026-02-21", "Rakija", 40, dec!(4.0)),
            record("2026-02-17", "Kajmak", 1, dec!(2.0)),
        ]);
        let perf = analyze_item_performance(&ds);
        let recs = engine().generate(&perf, &analyze_day_patterns(&ds));
        for rec in recs {
            assert!(matches!(
                rec.action,
                core_types::RecommendationAction::Promote
                    | core_types::RecommendationAction::Discount
                    | core_types::RecommendationAction::Remove
            ));
        }
    }
}
