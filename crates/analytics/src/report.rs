use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel item name used when a window holds no data.
pub const NO_ITEM: &str = "N/A";

/// A standardized report of one week of sales performance.
///
/// This struct is the final output of the `MetricsEngine` and serves as the
/// data transfer object for weekly results throughout the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    // I. Totals over the current window
    pub total_revenue: Decimal,
    pub total_quantity: i64,
    pub avg_daily_revenue: Decimal,

    // II. Week-over-week comparison
    /// 0 whenever the previous window's revenue is zero or negative.
    pub wow_change_pct: Decimal,

    // III. Item-level highlights
    pub top_seller: String,
    pub slow_mover: String,
    pub rising_star: String,
    pub rising_star_pct: Decimal,

    // IV. The current window's span (None when the window is empty)
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl WeeklyReport {
    /// Creates a new, zeroed-out WeeklyReport.
    /// This is the result for an empty current window, and the starting
    /// point before calculations otherwise.
    pub fn new() -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            total_quantity: 0,
            avg_daily_revenue: Decimal::ZERO,
            wow_change_pct: Decimal::ZERO,
            top_seller: NO_ITEM.to_string(),
            slow_mover: NO_ITEM.to_string(),
            rising_star: NO_ITEM.to_string(),
            rising_star_pct: Decimal::ZERO,
            start_date: None,
            end_date: None,
        }
    }
}

impl Default for WeeklyReport {
    fn default() -> Self {
        Self::new()
    }
}
