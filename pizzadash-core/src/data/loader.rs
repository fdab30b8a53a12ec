//! CSV loader for the sales dataset.
//!
//! Reads the file once per session, normalizes dates (day-first) and times
//! (`.` separated, missing on failure) into a typed [`Dataset`]. Numeric
//! fields are parsed but not range-checked.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::data::normalize::{parse_order_date, parse_order_time};
use crate::domain::{Dataset, OrderId, SalesRecord};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/pizza_sales.csv";

/// Errors from loading the dataset. All of them end the session.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data unavailable at '{source_name}': {reason}")]
    Unavailable { source_name: String, reason: String },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// One CSV row before normalization. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    order_id: String,
    order_date: String,
    order_time: String,
    pizza_name: String,
    pizza_category: String,
    pizza_size: String,
    quantity: String,
    total_price: String,
}

/// Load the dataset from a CSV file.
pub fn load(path: &Path) -> Result<Dataset, DataError> {
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| DataError::Unavailable {
        source_name: source_name.clone(),
        reason: e.to_string(),
    })?;
    load_reader(file, &source_name)
}

/// Load the dataset from any reader. `source_name` is only used in errors and logs.
pub fn load_reader<R: Read>(reader: R, source_name: &str) -> Result<Dataset, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| read_error(e, source_name))?
        .clone();
    if headers.is_empty() {
        return Err(DataError::Unavailable {
            source_name: source_name.to_string(),
            reason: "file is empty".into(),
        });
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| read_error(e, source_name))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRow = row.deserialize(Some(&headers))?;
        records.push(normalize_row(raw, line)?);
    }

    if records.is_empty() {
        return Err(DataError::Unavailable {
            source_name: source_name.to_string(),
            reason: "no data rows".into(),
        });
    }

    let dataset = Dataset::new(records);
    let missing_times = dataset.missing_time_count();
    tracing::info!(
        source = source_name,
        records = dataset.len(),
        missing_times,
        "loaded sales dataset"
    );
    if missing_times > 0 {
        tracing::warn!(
            missing_times,
            "some order times could not be parsed; they are excluded from hourly totals"
        );
    }
    Ok(dataset)
}

/// I/O failures while reading mean the source is unreadable; anything else is a CSV problem.
fn read_error(err: csv::Error, source_name: &str) -> DataError {
    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
        DataError::Unavailable {
            source_name: source_name.to_string(),
            reason: err.to_string(),
        }
    } else {
        DataError::Csv(err)
    }
}

fn normalize_row(raw: RawRow, line: u64) -> Result<SalesRecord, DataError> {
    let malformed = |reason: String| DataError::MalformedRecord { line, reason };

    let order_id = raw
        .order_id
        .parse::<u64>()
        .map_err(|_| malformed(format!("invalid order_id '{}'", raw.order_id)))?;
    let order_date = parse_order_date(&raw.order_date)
        .ok_or_else(|| malformed(format!("invalid order_date '{}'", raw.order_date)))?;
    let order_time = parse_order_time(&raw.order_time);
    if order_time.is_none() {
        tracing::debug!(line, raw = %raw.order_time, "order time missing");
    }
    let quantity = raw
        .quantity
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid quantity '{}'", raw.quantity)))?;
    let total_price = Decimal::from_str(&raw.total_price)
        .or_else(|_| Decimal::from_scientific(&raw.total_price))
        .map_err(|_| malformed(format!("invalid total_price '{}'", raw.total_price)))?;

    Ok(SalesRecord {
        order_id: OrderId(order_id),
        order_date,
        order_time,
        pizza_name: raw.pizza_name,
        pizza_category: raw.pizza_category,
        pizza_size: raw.pizza_size,
        quantity,
        total_price,
    })
}
