//! Test helpers for building an app over a small in-memory dataset

use chrono::{NaiveDate, NaiveTime};
use pizzadash_core::{Dataset, OrderId, ReportOptions, SalesRecord, Session};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::app::AppState;

fn record(id: u64, day: u32, month: u32, category: &str, size: &str, price: Decimal) -> SalesRecord {
    SalesRecord {
        order_id: OrderId(id),
        order_date: NaiveDate::from_ymd_opt(2015, month, day).unwrap(),
        order_time: NaiveTime::from_hms_opt(12, 0, 0),
        pizza_name: format!("The {category} Pizza"),
        pizza_category: category.into(),
        pizza_size: size.into(),
        quantity: 1,
        total_price: price,
    }
}

/// Three orders across three categories, sizes and months (Jan 1, Jan 15, Mar 1).
pub fn sample_session() -> Session {
    let dataset = Dataset::new(vec![
        record(1, 1, 1, "Classic", "L", dec!(20.00)),
        record(2, 15, 1, "Veggie", "M", dec!(16.00)),
        record(3, 1, 3, "Supreme", "S", dec!(12.50)),
    ]);
    Session::from_dataset(dataset, ReportOptions::default(), "test").unwrap()
}

pub fn sample_app() -> AppState {
    AppState::new(sample_session())
}
