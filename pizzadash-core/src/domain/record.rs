//! SalesRecord: one line item of the sales dataset.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::OrderId;

/// A single pizza line item.
///
/// `order_time` is `None` when the raw value could not be parsed; such
/// records still count everywhere except time-of-day aggregations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub order_id: OrderId,
    pub order_date: NaiveDate,
    pub order_time: Option<NaiveTime>,
    pub pizza_name: String,
    pub pizza_category: String,
    pub pizza_size: String,
    pub quantity: u32,
    pub total_price: Decimal,
}

impl SalesRecord {
    /// Hour of day (0-23), or `None` if the order time is missing.
    pub fn order_hour(&self) -> Option<u32> {
        self.order_time.map(|t| t.hour())
    }
}

/// The full loaded dataset. Read-only once constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose order time is missing.
    pub fn missing_time_count(&self) -> usize {
        self.records.iter().filter(|r| r.order_time.is_none()).count()
    }

    /// Earliest and latest order date, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.order_date;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.order_date), hi.max(r.order_date))
        }))
    }
}

impl FromIterator<SalesRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SalesRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
