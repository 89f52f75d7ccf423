use chrono::{Duration, NaiveDate};
use core_types::SalesDataset;
use tracing::debug;

/// A current 7-calendar-day window of sales and the 7 days immediately
/// before it. The two never overlap and are only compared, never merged.
#[derive(Debug, Clone)]
pub struct WeekWindow {
    pub current: SalesDataset,
    pub previous: SalesDataset,
}

impl WeekWindow {
    fn empty() -> Self {
        Self {
            current: SalesDataset::empty(),
            previous: SalesDataset::empty(),
        }
    }
}

/// Splits a dataset into the target week and the week before it.
///
/// The current window is `[week_end - 6, week_end]`, both ends inclusive.
/// When `week_end` is not given, the latest date in the dataset is used.
/// An empty dataset yields two empty windows.
pub fn split_week(dataset: &SalesDataset, week_end: Option<NaiveDate>) -> WeekWindow {
    let Some(end_date) = week_end.or_else(|| dataset.max_date()) else {
        return WeekWindow::empty();
    };

    let start_date = end_date - Duration::days(6);
    let prev_end = start_date - Duration::days(1);
    let prev_start = prev_end - Duration::days(6);

    debug!(
        "Week window: current {}..={}, previous {}..={}",
        start_date, end_date, prev_start, prev_end
    );

    WeekWindow {
        current: dataset.filter_range(start_date, end_date),
        previous: dataset.filter_range(prev_start, prev_end),
    }
}
