//! Aggregation engine: grouped revenue tables that drive the charts.
//!
//! Every table is an ordered list of `(key, total)` rows where `total` is the
//! summed `total_price` of the group. Ordering rules differ per table and are
//! part of each function's contract.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::SalesRecord;
use crate::filter::FilteredView;

/// Number of pizzas in the top-sellers table unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Canonical weekday order for the day-of-week table.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One row of an aggregation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow<K> {
    pub key: K,
    pub total: Decimal,
}

impl<K> AggregateRow<K> {
    pub fn new(key: K, total: Decimal) -> Self {
        Self { key, total }
    }
}

/// An ordered `(key, total)` table.
pub type AggregationTable<K> = Vec<AggregateRow<K>>;

/// How hours with no sales appear in the hourly table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourFill {
    /// Only hours that have sales.
    #[default]
    Sparse,
    /// All 24 hours, zero where nothing sold.
    ZeroFill,
}

fn sum_by<K: Ord>(
    view: &FilteredView<'_>,
    key: impl Fn(&SalesRecord) -> K,
) -> BTreeMap<K, Decimal> {
    let mut groups = BTreeMap::new();
    for record in view.iter() {
        *groups.entry(key(record)).or_insert(Decimal::ZERO) += record.total_price;
    }
    groups
}

fn into_table<K>(groups: BTreeMap<K, Decimal>) -> AggregationTable<K> {
    groups
        .into_iter()
        .map(|(key, total)| AggregateRow::new(key, total))
        .collect()
}

/// Revenue per category, ordered by category name.
pub fn by_category(view: &FilteredView<'_>) -> AggregationTable<String> {
    into_table(sum_by(view, |r| r.pizza_category.clone()))
}

/// Revenue per size, ordered by size name.
pub fn by_size(view: &FilteredView<'_>) -> AggregationTable<String> {
    into_table(sum_by(view, |r| r.pizza_size.clone()))
}

/// Revenue per calendar month, chronological, keyed `YYYY-MM`.
pub fn by_month(view: &FilteredView<'_>) -> AggregationTable<String> {
    sum_by(view, |r| (r.order_date.year(), r.order_date.month()))
        .into_iter()
        .map(|((year, month), total)| AggregateRow::new(format!("{year:04}-{month:02}"), total))
        .collect()
}

/// Revenue per hour of day, ascending. Records with a missing time are skipped.
pub fn by_hour(view: &FilteredView<'_>, fill: HourFill) -> AggregationTable<u32> {
    let mut groups: BTreeMap<u32, Decimal> = BTreeMap::new();
    for record in view.iter() {
        if let Some(hour) = record.order_hour() {
            *groups.entry(hour).or_insert(Decimal::ZERO) += record.total_price;
        }
    }
    if fill == HourFill::ZeroFill {
        for hour in 0..24 {
            groups.entry(hour).or_insert(Decimal::ZERO);
        }
    }
    into_table(groups)
}

/// Best-selling pizzas by revenue, descending, at most `n` rows.
///
/// Equal totals are ordered by name so the result is reproducible.
pub fn top_pizzas(view: &FilteredView<'_>, n: usize) -> AggregationTable<String> {
    let mut rows = into_table(sum_by(view, |r| r.pizza_name.clone()));
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
    rows.truncate(n);
    rows
}

/// Revenue per weekday, always seven rows Monday through Sunday.
pub fn by_weekday(view: &FilteredView<'_>) -> AggregationTable<String> {
    let mut groups: HashMap<Weekday, Decimal> = HashMap::new();
    for record in view.iter() {
        *groups.entry(record.order_date.weekday()).or_insert(Decimal::ZERO) += record.total_price;
    }
    WEEKDAYS
        .iter()
        .map(|day| {
            AggregateRow::new(
                weekday_name(*day).to_string(),
                groups.get(day).copied().unwrap_or(Decimal::ZERO),
            )
        })
        .collect()
}

/// Full English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Sum of every row's total.
pub fn table_total<K>(table: &[AggregateRow<K>]) -> Decimal {
    table.iter().map(|row| row.total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dataset, OrderId};
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal_macros::dec;

    fn record(
        name: &str,
        category: &str,
        date: (i32, u32, u32),
        time: Option<(u32, u32)>,
        price: Decimal,
    ) -> SalesRecord {
        SalesRecord {
            order_id: OrderId(1),
            order_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            order_time: time.and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0)),
            pizza_name: name.into(),
            pizza_category: category.into(),
            pizza_size: "M".into(),
            quantity: 1,
            total_price: price,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            // 2015-01-05 is a Monday.
            record("Hawaiian", "Classic", (2015, 1, 5), Some((12, 10)), dec!(12.00)),
            record("Pepperoni", "Classic", (2015, 1, 6), Some((12, 45)), dec!(15.00)),
            record("Garden", "Veggie", (2015, 2, 1), Some((18, 0)), dec!(9.50)),
            record("Hawaiian", "Classic", (2014, 12, 31), None, dec!(13.00)),
        ])
    }

    #[test]
    fn category_totals_sorted_by_name() {
        let ds = dataset();
        let table = by_category(&FilteredView::all(&ds));
        assert_eq!(
            table,
            vec![
                AggregateRow::new("Classic".to_string(), dec!(40.00)),
                AggregateRow::new("Veggie".to_string(), dec!(9.50)),
            ]
        );
    }

    #[test]
    fn month_keys_are_chronological_across_years() {
        let ds = dataset();
        let keys: Vec<String> = by_month(&FilteredView::all(&ds))
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(keys, vec!["2014-12", "2015-01", "2015-02"]);
    }

    #[test]
    fn hourly_skips_missing_times() {
        let ds = dataset();
        let table = by_hour(&FilteredView::all(&ds), HourFill::Sparse);
        assert_eq!(
            table,
            vec![
                AggregateRow::new(12, dec!(27.00)),
                AggregateRow::new(18, dec!(9.50)),
            ]
        );
        // The missing-time record is not counted as hour 0.
        assert!(table.iter().all(|r| r.key != 0));
    }

    #[test]
    fn hourly_zero_fill_has_24_rows() {
        let ds = dataset();
        let table = by_hour(&FilteredView::all(&ds), HourFill::ZeroFill);
        assert_eq!(table.len(), 24);
        assert_eq!(table[0], AggregateRow::new(0, Decimal::ZERO));
        assert_eq!(table[12].total, dec!(27.00));
        assert_eq!(table_total(&table), dec!(36.50));
    }

    #[test]
    fn top_pizzas_descending_with_name_tiebreak() {
        let ds = Dataset::new(vec![
            record("Zesty", "Classic", (2015, 1, 1), None, dec!(10)),
            record("Alpha", "Classic", (2015, 1, 1), None, dec!(10)),
            record("Big", "Classic", (2015, 1, 1), None, dec!(30)),
        ]);
        let names: Vec<String> = top_pizzas(&FilteredView::all(&ds), 10)
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(names, vec!["Big", "Alpha", "Zesty"]);
    }

    #[test]
    fn top_pizzas_truncates() {
        let records: Vec<SalesRecord> = (0..15)
            .map(|i| {
                record(
                    &format!("Pizza {i:02}"),
                    "Classic",
                    (2015, 1, 1),
                    None,
                    Decimal::from(i + 1),
                )
            })
            .collect();
        let ds = Dataset::new(records);
        let table = top_pizzas(&FilteredView::all(&ds), DEFAULT_TOP_N);
        assert_eq!(table.len(), 10);
        assert_eq!(table[0].key, "Pizza 14");
        assert_eq!(table[9].key, "Pizza 05");
    }

    #[test]
    fn weekday_is_canonical_with_zeros() {
        let ds = dataset();
        let table = by_weekday(&FilteredView::all(&ds));
        let keys: Vec<&str> = table.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert_eq!(table[0].total, dec!(12.00)); // Mon 2015-01-05
        assert_eq!(table[1].total, dec!(15.00)); // Tue 2015-01-06
        assert_eq!(table[2].total, dec!(13.00)); // Wed 2014-12-31
        assert_eq!(table[4].total, Decimal::ZERO);
        assert_eq!(table[6].total, dec!(9.50)); // Sun 2015-02-01
    }

    #[test]
    fn empty_view_gives_empty_tables() {
        let view = FilteredView::default();
        assert!(by_category(&view).is_empty());
        assert!(by_size(&view).is_empty());
        assert!(by_month(&view).is_empty());
        assert!(by_hour(&view, HourFill::Sparse).is_empty());
        assert!(top_pizzas(&view, 10).is_empty());
        let week = by_weekday(&view);
        assert_eq!(week.len(), 7);
        assert!(week.iter().all(|r| r.total.is_zero()));
    }
}
