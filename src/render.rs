//! Text rendering for the reports: banner-style plain-text files plus
//! comfy-table views for stdout.

use analytics::WeeklyReport;
use comfy_table::Table;
use configuration::Labels;
use menu::{CategorySummary, ItemPerformance, Recommendation};
use rust_decimal::Decimal;

/// `EUR 12.34` style money rendering.
fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn sign(value: Decimal) -> &'static str {
    if value >= Decimal::ZERO { "+" } else { "" }
}

/// Three-line section header shared by the report renderers.
pub fn banner(title: &str, restaurant: &str) -> String {
    let bar = "=".repeat(50);
    format!("{bar}\n  {} - {title}\n{bar}", restaurant.to_uppercase())
}

/// Formats the weekly metrics into the banner-style text report.
pub fn format_weekly_report(report: &WeeklyReport, labels: &Labels, restaurant: &str) -> String {
    let start = report
        .start_date
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_else(|| "?".to_string());
    let end = report
        .end_date
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "?".to_string());

    let bar = "=".repeat(50);
    let lines = [
        bar.clone(),
        format!("  {} - {}", restaurant.to_uppercase(), labels.weekly_title),
        format!("  {start} - {end}"),
        bar.clone(),
        format!(
            "  {:.<32} EUR {} ({}{:.1}% WoW)",
            labels.total_revenue,
            money(report.total_revenue),
            sign(report.wow_change_pct),
            report.wow_change_pct
        ),
        format!("  {:.<32} {}", labels.total_items_sold, report.total_quantity),
        format!(
            "  {:.<32} EUR {}",
            labels.avg_daily_revenue,
            money(report.avg_daily_revenue)
        ),
        format!("  {:.<32} {}", labels.top_seller, report.top_seller),
        format!("  {:.<32} {}", labels.slow_mover, report.slow_mover),
        format!(
            "  {:.<32} {} ({}{:.0}%)",
            labels.rising_star,
            report.rising_star,
            sign(report.rising_star_pct),
            report.rising_star_pct
        ),
        bar,
    ];
    lines.join("\n")
}

/// Formats the menu analysis into the banner-style text report.
pub fn format_menu_report(
    performance: &[ItemPerformance],
    categories: &[CategorySummary],
    recommendations: &[Recommendation],
    labels: &Labels,
    restaurant: &str,
) -> String {
    let bar = "=".repeat(55);
    let rule = format!("  {}", "-".repeat(40));
    let mut lines = vec![
        bar.clone(),
        format!("  {} - {}", restaurant.to_uppercase(), labels.menu_title),
        bar.clone(),
    ];

    lines.push(format!("\n  {}", labels.best_by_revenue));
    lines.push(rule.clone());
    for row in performance.iter().take(3) {
        lines.push(format!(
            "  {:<25} EUR {:>9}  ({} sold)",
            row.item_name,
            money(row.total_revenue),
            row.total_quantity
        ));
    }

    lines.push(format!("\n  {}", labels.worst_by_revenue));
    lines.push(rule.clone());
    for row in performance.iter().skip(performance.len().saturating_sub(3)) {
        lines.push(format!(
            "  {:<25} EUR {:>9}  ({} sold)",
            row.item_name,
            money(row.total_revenue),
            row.total_quantity
        ));
    }

    lines.push(format!("\n  {}", labels.category_breakdown));
    lines.push(rule.clone());
    for row in categories {
        lines.push(format!(
            "  {:<20} EUR {:>9}  ({}%)",
            row.category,
            money(row.total_revenue),
            row.revenue_pct
        ));
    }

    lines.push(format!("\n  {}", labels.recommendations));
    lines.push(rule);
    for rec in recommendations {
        lines.push(format!(
            "  [{}] {}: {}",
            labels.action(rec.action),
            rec.item_name,
            rec.reason
        ));
    }

    lines.push(bar);
    lines.join("\n")
}

/// The full performance table for stdout.
pub fn performance_table(performance: &[ItemPerformance], labels: &Labels) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        labels.item,
        labels.revenue,
        labels.quantity,
        labels.avg_price,
        labels.days_sold,
        labels.revenue_rank,
        labels.volume_rank,
    ]);
    for row in performance {
        table.add_row(vec![
            row.item_name.clone(),
            money(row.total_revenue),
            row.total_quantity.to_string(),
            money(row.avg_unit_price),
            row.distinct_days_sold.to_string(),
            row.revenue_rank.to_string(),
            row.volume_rank.to_string(),
        ]);
    }
    table
}

/// The category summary table for stdout.
pub fn category_table(categories: &[CategorySummary], labels: &Labels) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        labels.category,
        labels.revenue,
        labels.quantity,
        labels.item_count,
        labels.share,
    ]);
    for row in categories {
        table.add_row(vec![
            row.category.clone(),
            money(row.total_revenue),
            row.total_quantity.to_string(),
            row.item_count.to_string(),
            row.revenue_pct.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Language;
    use rust_decimal_macros::dec;

    fn sample_report() -> WeeklyReport {
        let mut report = WeeklyReport::new();
        report.total_revenue = dec!(1234.50);
        report.total_quantity = 210;
        report.avg_daily_revenue = dec!(176.36);
        report.wow_change_pct = dec!(12.5);
        report.top_seller = "Sarma".to_string();
        report.slow_mover = "Turkish Coffee".to_string();
        report.rising_star = "Bao Buns".to_string();
        report.rising_star_pct = dec!(45);
        report.start_date = Some("2026-02-16".parse().unwrap());
        report.end_date = Some("2026-02-22".parse().unwrap());
        report
    }

    #[test]
    fn english_weekly_report_carries_english_labels() {
        let text = format_weekly_report(
            &sample_report(),
            Labels::for_language(Language::En),
            "Konoba",
        );
        assert!(text.contains("Weekly Sales Report"));
        assert!(text.contains("Total Revenue"));
        assert!(text.contains("+12.5% WoW"));
        assert!(text.contains("Feb 16 - Feb 22, 2026"));
    }

    #[test]
    fn serbian_weekly_report_carries_serbian_labels() {
        let text = format_weekly_report(
            &sample_report(),
            Labels::for_language(Language::Sr),
            "Konoba",
        );
        assert!(text.contains("Nedeljni"));
        assert!(text.contains("Ukupan Prihod"));
    }

    #[test]
    fn menu_report_lists_recommendations_with_action_labels() {
        let performance = vec![ItemPerformance {
            item_name: "Sarma".to_string(),
            total_revenue: dec!(50),
            total_quantity: 10,
            avg_unit_price: dec!(5),
            distinct_days_sold: 1,
            revenue_rank: 1,
            volume_rank: 1,
        }];
        let categories = vec![CategorySummary {
            category: "Mains".to_string(),
            total_revenue: dec!(50),
            total_quantity: 10,
            item_count: 1,
            revenue_pct: dec!(100.0),
        }];
        let recommendations = vec![Recommendation {
            action: core_types::RecommendationAction::Promote,
            item_name: "Sarma".to_string(),
            reason: "Top revenue: EUR 50.00, 10 sold".to_string(),
        }];
        let text = format_menu_report(
            &performance,
            &categories,
            &recommendations,
            Labels::for_language(Language::En),
            "Konoba",
        );
        assert!(text.contains("Menu Performance Analysis"));
        assert!(text.contains("[PROMOTE] Sarma"));
        assert!(text.contains("(100.0%)"));
    }
}
