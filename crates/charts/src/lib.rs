//! # Konoba Charts
//!
//! PNG chart rendering for the weekly report and the menu analysis.
//!
//! This crate is a presentation collaborator: it receives the aggregated
//! tables, draws them with plotters, and returns the written file paths.
//! The convenience `render_*` functions log individual chart failures and
//! keep going; a missing chart never aborts a run.

use chrono::NaiveDate;
use configuration::Labels;
use core_types::{Language, SalesDataset};
use menu::{CategorySummary, DayPatternTable, ItemPerformance};
use plotters::element::Pie;
use plotters::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod error;

pub use error::ChartError;

/// House palette, cycled across series.
const PALETTE: [RGBColor; 5] = [
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0x34, 0x98, 0xdb),
    RGBColor(0x2e, 0xcc, 0x71),
    RGBColor(0xf3, 0x9c, 0x12),
    RGBColor(0x9b, 0x59, 0xb6),
];

const WIDE: (u32, u32) = (1000, 500);
const SQUARE: (u32, u32) = (700, 700);

/// Renders the weekly report charts: daily revenue, category share, and
/// top items. Empty input produces no files.
pub fn render_weekly_charts(
    current: &SalesDataset,
    categories: &[CategorySummary],
    performance: &[ItemPerformance],
    out_dir: &Path,
    labels: &Labels,
) -> Vec<PathBuf> {
    if current.is_empty() {
        warn!("No data to generate charts from");
        return Vec::new();
    }

    let charts = [
        daily_revenue_bar(current, out_dir, labels),
        category_pie(categories, out_dir, labels, "revenue_by_category.png"),
        top_items_bar(performance, out_dir, labels, "top_items.png", labels.top_items),
    ];
    collect_rendered(charts)
}

/// Renders the menu analysis charts: item revenue, the sales heatmap, and
/// category share. Empty input produces no files.
pub fn render_menu_charts(
    performance: &[ItemPerformance],
    patterns: &DayPatternTable,
    categories: &[CategorySummary],
    out_dir: &Path,
    labels: &Labels,
    lang: Language,
) -> Vec<PathBuf> {
    if performance.is_empty() {
        warn!("No data to generate charts from");
        return Vec::new();
    }

    let charts = [
        top_items_bar(
            performance,
            out_dir,
            labels,
            "menu_revenue.png",
            labels.best_by_revenue,
        ),
        item_day_heatmap(patterns, out_dir, labels, lang),
        category_pie(categories, out_dir, labels, "category_revenue.png"),
    ];
    collect_rendered(charts)
}

fn collect_rendered(results: [Result<PathBuf, ChartError>; 3]) -> Vec<PathBuf> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Chart rendering failed: {}", e);
                None
            }
        })
        .collect()
}

/// Revenue summed per calendar date, as a vertical bar chart.
pub fn daily_revenue_bar(
    current: &SalesDataset,
    out_dir: &Path,
    labels: &Labels,
) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join("daily_revenue.png");

    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in current {
        *daily.entry(record.date).or_default() += record.revenue;
    }
    let dates: Vec<NaiveDate> = daily.keys().copied().collect();
    let values: Vec<f64> = daily.values().map(|v| to_f64(*v)).collect();

    draw_vertical_bars(&path, labels.daily_revenue, labels.date, labels.revenue, &values, &|idx| {
        dates
            .get(idx)
            .map(|d| d.format("%m-%d").to_string())
            .unwrap_or_default()
    })
    .map_err(render_error)?;

    Ok(path)
}

/// Category revenue share, as a pie chart.
pub fn category_pie(
    categories: &[CategorySummary],
    out_dir: &Path,
    labels: &Labels,
    file_name: &str,
) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(file_name);

    let sizes: Vec<f64> = categories
        .iter()
        .map(|c| to_f64(c.total_revenue))
        .collect();
    let names: Vec<String> = categories.iter().map(|c| c.category.clone()).collect();
    let colors: Vec<RGBColor> = (0..categories.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();

    draw_pie(&path, labels.revenue_by_category, &sizes, &colors, &names)
        .map_err(render_error)?;

    Ok(path)
}

/// Per-item revenue as horizontal bars, best performer on top.
pub fn top_items_bar(
    performance: &[ItemPerformance],
    out_dir: &Path,
    labels: &Labels,
    file_name: &str,
    title: &str,
) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(file_name);

    let names: Vec<String> = performance.iter().map(|r| r.item_name.clone()).collect();
    let values: Vec<f64> = performance
        .iter()
        .map(|r| to_f64(r.total_revenue))
        .collect();

    draw_horizontal_bars(&path, title, labels.revenue, &names, &values).map_err(render_error)?;

    Ok(path)
}

/// Item x weekday quantity heatmap.
pub fn item_day_heatmap(
    patterns: &DayPatternTable,
    out_dir: &Path,
    labels: &Labels,
    lang: Language,
) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join("sales_heatmap.png");

    draw_heatmap(&path, labels.heatmap_title, patterns, configuration::day_names(lang))
        .map_err(render_error)?;

    Ok(path)
}

fn render_error(e: Box<dyn std::error::Error>) -> ChartError {
    ChartError::Render(e.to_string())
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn draw_vertical_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    values: &[f64],
    label_for: &dyn Fn(usize) -> String,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = values.len() as i32;
    let max_y = values.iter().cloned().fold(0.0, f64::max).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0i32..n, 0f64..max_y)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(values.len().min(14))
        .x_label_formatter(&|x| label_for(*x as usize))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Rectangle::new(
            [(i as i32, 0.0), (i as i32 + 1, *v)],
            PALETTE[0].mix(0.85).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn draw_horizontal_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    names: &[String],
    values: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = names.len() as i32;
    let max_x = values.iter().cloned().fold(0.0, f64::max).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(150)
        .build_cartesian_2d(0f64..max_x, 0i32..n)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(names.len())
        // Row 0 of the table is drawn at the top.
        .y_label_formatter(&|y| {
            let idx = (n - 1 - *y) as usize;
            names.get(idx).cloned().unwrap_or_default()
        })
        .x_desc(x_desc)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        let y = n - 1 - i as i32;
        Rectangle::new([(0.0, y), (*v, y + 1)], PALETTE[1].mix(0.85).filled())
    }))?;

    root.present()?;
    Ok(())
}

fn draw_pie(
    path: &Path,
    title: &str,
    sizes: &[f64],
    colors: &[RGBColor],
    names: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, SQUARE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 28))?;

    let center = (SQUARE.0 as i32 / 2, SQUARE.1 as i32 / 2);
    let radius = 240.0;
    let mut pie = Pie::new(&center, &radius, sizes, colors, names);
    pie.label_style(("sans-serif", 18).into_font());
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

fn draw_heatmap(
    path: &Path,
    title: &str,
    patterns: &DayPatternTable,
    day_names: &[&str; 7],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = patterns.items.len() as i32;
    let max_qty = patterns
        .grid
        .iter()
        .flat_map(|row| row.iter())
        .copied()
        .max()
        .unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(150)
        .build_cartesian_2d(0i32..7, 0i32..n)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(7)
        .x_label_formatter(&|x| {
            day_names
                .get(*x as usize)
                .map(|d| d.to_string())
                .unwrap_or_default()
        })
        .y_labels(patterns.items.len())
        .y_label_formatter(&|y| {
            let idx = (n - 1 - *y) as usize;
            patterns.items.get(idx).cloned().unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(patterns.grid.iter().enumerate().flat_map(|(row_idx, row)| {
        let y = n - 1 - row_idx as i32;
        row.iter().enumerate().map(move |(day, qty)| {
            Rectangle::new(
                [(day as i32, y), (day as i32 + 1, y + 1)],
                heat_color(*qty, max_qty).filled(),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

/// Linear white-to-red ramp over the cell intensity.
fn heat_color(value: i64, max: i64) -> RGBColor {
    let t = if max > 0 {
        value as f64 / max as f64
    } else {
        0.0
    };
    let lerp = |from: f64, to: f64| (from + (to - from) * t) as u8;
    RGBColor(lerp(255.0, 190.0), lerp(255.0, 40.0), lerp(255.0, 30.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_ramp_endpoints() {
        assert_eq!(heat_color(0, 10), RGBColor(255, 255, 255));
        assert_eq!(heat_color(10, 10), RGBColor(190, 40, 30));
        // A zero maximum must not divide by zero.
        assert_eq!(heat_color(0, 0), RGBColor(255, 255, 255));
    }
}
