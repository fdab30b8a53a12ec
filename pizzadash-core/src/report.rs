//! Dashboard report: everything the presentation layer needs for one filter state.

use serde::{Deserialize, Serialize};

use crate::aggregate::{self, AggregationTable, HourFill, DEFAULT_TOP_N};
use crate::filter::FilteredView;
use crate::metrics::Kpis;

/// Knobs that shape the aggregation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub top_n: usize,
    pub hour_fill: HourFill,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            hour_fill: HourFill::Sparse,
        }
    }
}

/// KPIs plus every chart table, computed from a single filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Line items in the filtered view.
    pub record_count: usize,
    pub kpis: Kpis,
    pub by_category: AggregationTable<String>,
    pub by_size: AggregationTable<String>,
    pub by_month: AggregationTable<String>,
    pub by_hour: AggregationTable<u32>,
    pub top_pizzas: AggregationTable<String>,
    pub by_weekday: AggregationTable<String>,
}

impl DashboardReport {
    pub fn compute(view: &FilteredView<'_>, options: &ReportOptions) -> Self {
        Self {
            record_count: view.len(),
            kpis: Kpis::compute(view),
            by_category: aggregate::by_category(view),
            by_size: aggregate::by_size(view),
            by_month: aggregate::by_month(view),
            by_hour: aggregate::by_hour(view, options.hour_fill),
            top_pizzas: aggregate::top_pizzas(view, options.top_n),
            by_weekday: aggregate::by_weekday(view),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
