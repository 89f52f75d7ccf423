//! # Konoba Ingest
//!
//! Tolerant loading of tabular sales data.
//!
//! The loader is deliberately forgiving: rows with unparseable dates are
//! dropped (and counted), malformed numeric fields are coerced to zero, and
//! a file that cannot be read at all yields an empty dataset rather than an
//! error. Downstream crates treat the empty dataset as the universal
//! "no data" signal, so nothing past this point needs a failure path for
//! bad input.

use chrono::NaiveDate;
use core_types::{SalesDataset, SalesRecord};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

pub mod error;

pub use error::IngestError;

/// Columns the loader expects; anything missing is synthesized as empty.
const EXPECTED_COLUMNS: [&str; 5] = ["date", "item_name", "category", "quantity", "unit_price"];

/// Date formats accepted in the `date` column, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// The result of loading a sales file: the surviving records plus the number
/// of rows dropped for unparseable dates.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub dataset: SalesDataset,
    pub dropped_rows: usize,
}

/// Loads sales data from a delimited file, recovering from every failure.
///
/// A file that cannot be opened or whose header cannot be read produces an
/// empty dataset and a warning; callers proceed with "no data" messaging.
pub fn load_sales_data(path: impl AsRef<Path>) -> LoadOutcome {
    let path = path.as_ref();
    match try_load(path) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Failed to load sales data from {}: {}", path.display(), e);
            LoadOutcome::default()
        }
    }
}

/// Loads sales data, propagating file-level failures to the caller.
///
/// Row-level defects are still handled in place; only an unopenable file or
/// an unreadable header is an error.
pub fn try_load(path: impl AsRef<Path>) -> Result<LoadOutcome, IngestError> {
    let file = File::open(path.as_ref())?;
    load_from_reader(file)
}

/// Loads sales data from any reader producing delimited text with a header.
pub fn load_from_reader<R: Read>(reader: R) -> Result<LoadOutcome, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = column_index(csv_reader.headers()?);

    let missing: Vec<&str> = EXPECTED_COLUMNS
        .iter()
        .filter(|c| !columns.contains_key(**c))
        .copied()
        .collect();
    if !missing.is_empty() {
        warn!("Missing columns in data: {:?}", missing);
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (row_idx, result) in csv_reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                debug!("Skipping unreadable row {}: {}", row_idx + 2, e);
                dropped += 1;
                continue;
            }
        };

        let Some(date) = parse_date(field(&row, &columns, "date")) else {
            dropped += 1;
            continue;
        };

        let quantity = parse_quantity(field(&row, &columns, "quantity"));
        let unit_price = parse_price(field(&row, &columns, "unit_price"));

        records.push(SalesRecord::new(
            date,
            field(&row, &columns, "item_name"),
            field(&row, &columns, "category"),
            quantity,
            unit_price,
        ));
    }

    if dropped > 0 {
        warn!("Dropped {} rows with unparseable dates", dropped);
    }

    Ok(LoadOutcome {
        dataset: SalesDataset::new(records),
        dropped_rows: dropped,
    })
}

/// Maps lowercased header names to their field positions.
fn column_index(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_ascii_lowercase(), idx))
        .collect()
}

/// A field by column name; absent columns and short rows read as empty.
fn field<'a>(row: &'a StringRecord, columns: &HashMap<String, usize>, name: &str) -> &'a str {
    columns
        .get(name)
        .and_then(|idx| row.get(*idx))
        .unwrap_or("")
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Coerces a quantity to a non-negative integer, defaulting to 0.
///
/// Accepts integer text and float text (truncated), matching the loose
/// numeric coercion the input files need.
fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    let value = raw
        .parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|f| f.trunc() as i64))
        .unwrap_or(0);
    value.max(0)
}

/// Coerces a unit price to a non-negative decimal, defaulting to 0.
fn parse_price(raw: &str) -> Decimal {
    let value = Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO);
    value.max(Decimal::ZERO)
}
