use core_types::SalesDataset;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Revenue contribution of one menu category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_revenue: Decimal,
    pub total_quantity: i64,
    pub item_count: usize,
    /// Share of the grand total revenue, rounded to 1 decimal.
    /// 0 when the grand total itself is zero.
    pub revenue_pct: Decimal,
}

#[derive(Default)]
struct CategoryAccumulator {
    revenue: Decimal,
    quantity: i64,
    items: BTreeSet<String>,
}

/// Computes revenue contribution per menu category, sorted by revenue
/// descending (ties in alphabetical category order).
pub fn analyze_category_revenue(dataset: &SalesDataset) -> Vec<CategorySummary> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let mut by_category: BTreeMap<&str, CategoryAccumulator> = BTreeMap::new();
    for record in dataset {
        let acc = by_category.entry(record.category.as_str()).or_default();
        acc.revenue += record.revenue;
        acc.quantity += record.quantity;
        acc.items.insert(record.item_name.clone());
    }

    let grand_total: Decimal = by_category.values().map(|acc| acc.revenue).sum();

    let mut rows: Vec<CategorySummary> = by_category
        .into_iter()
        .map(|(category, acc)| {
            let revenue_pct = if grand_total > Decimal::ZERO {
                (acc.revenue / grand_total * Decimal::from(100)).round_dp(1)
            } else {
                Decimal::ZERO
            };
            CategorySummary {
                category: category.to_string(),
                total_revenue: acc.revenue,
                total_quantity: acc.quantity,
                item_count: acc.items.len(),
                revenue_pct,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
    rows
}
