//! KPI metrics: pure functions that compute scalar summaries of a view.
//!
//! Every metric tolerates an empty view and returns a zero value rather than
//! failing. Money values are rounded to two decimal places.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::FilteredView;

/// Decimal places for every money KPI.
pub const MONEY_DP: u32 = 2;

/// The four headline KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_revenue: Decimal,
    pub total_orders: usize,
    pub total_pizzas_sold: u64,
    pub avg_order_value: Decimal,
}

impl Kpis {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        Self {
            total_revenue: total_revenue(view),
            total_orders: total_orders(view),
            total_pizzas_sold: total_pizzas_sold(view),
            avg_order_value: avg_order_value(view),
        }
    }
}

fn revenue_unrounded(view: &FilteredView<'_>) -> Decimal {
    view.iter().map(|r| r.total_price).sum()
}

/// Sum of line prices, rounded to 2 dp.
pub fn total_revenue(view: &FilteredView<'_>) -> Decimal {
    revenue_unrounded(view).round_dp(MONEY_DP)
}

/// Count of distinct order ids (not line items).
pub fn total_orders(view: &FilteredView<'_>) -> usize {
    view.iter().map(|r| r.order_id).collect::<HashSet<_>>().len()
}

/// Sum of quantities.
pub fn total_pizzas_sold(view: &FilteredView<'_>) -> u64 {
    view.iter().map(|r| u64::from(r.quantity)).sum()
}

/// Revenue per distinct order, rounded to 2 dp.
///
/// Returns 0.00 when there are no orders.
pub fn avg_order_value(view: &FilteredView<'_>) -> Decimal {
    let orders = total_orders(view);
    if orders == 0 {
        return Decimal::ZERO.round_dp(MONEY_DP);
    }
    (revenue_unrounded(view) / Decimal::from(orders)).round_dp(MONEY_DP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dataset, OrderId, SalesRecord};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(id: u64, qty: u32, price: Decimal) -> SalesRecord {
        SalesRecord {
            order_id: OrderId(id),
            order_date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            order_time: None,
            pizza_name: "The Pepperoni Pizza".into(),
            pizza_category: "Classic".into(),
            pizza_size: "L".into(),
            quantity: qty,
            total_price: price,
        }
    }

    #[test]
    fn empty_view_is_all_zero() {
        let view = FilteredView::default();
        let kpis = Kpis::compute(&view);
        assert_eq!(kpis.total_revenue, dec!(0.00));
        assert_eq!(kpis.total_orders, 0);
        assert_eq!(kpis.total_pizzas_sold, 0);
        assert_eq!(kpis.avg_order_value, dec!(0.00));
    }

    #[test]
    fn orders_count_distinct_ids() {
        let ds = Dataset::new(vec![
            record(1, 1, dec!(10)),
            record(1, 2, dec!(20)),
            record(2, 1, dec!(5)),
        ]);
        let view = FilteredView::all(&ds);
        assert_eq!(total_orders(&view), 2);
        assert_eq!(total_pizzas_sold(&view), 4);
    }

    #[test]
    fn revenue_rounds_to_cents() {
        let ds = Dataset::new(vec![record(1, 1, dec!(10.004)), record(2, 1, dec!(0.003))]);
        let view = FilteredView::all(&ds);
        assert_eq!(total_revenue(&view), dec!(10.01));
    }

    #[test]
    fn average_uses_unrounded_revenue() {
        // 10 / 3 = 3.333.. → 3.33
        let ds = Dataset::new(vec![
            record(1, 1, dec!(4)),
            record(2, 1, dec!(3)),
            record(3, 1, dec!(3)),
        ]);
        let view = FilteredView::all(&ds);
        assert_eq!(avg_order_value(&view), dec!(3.33));
    }

    #[test]
    fn average_with_multi_line_orders() {
        let ds = Dataset::new(vec![
            record(1, 2, dec!(20.00)),
            record(1, 1, dec!(10.00)),
            record(2, 1, dec!(8.00)),
        ]);
        let view = FilteredView::all(&ds);
        assert_eq!(avg_order_value(&view), dec!(19.00));
    }
}
