//! Pizza sales dashboard core: loader, filter, metrics and aggregation.
//!
//! This crate contains the whole data pipeline behind the dashboard:
//! - Typed sales records and the loaded dataset
//! - CSV loader with day-first date and dotted-time normalization
//! - Filter engine (date range, category set, size set)
//! - KPI metrics (revenue, orders, pizzas sold, average order value)
//! - Aggregation tables (category, size, month, hour, top pizzas, weekday)
//! - Report assembly and a session that caches the loaded dataset
//!
//! Presentation (TUI, CLI) lives in the sibling crates.

pub mod aggregate;
pub mod config;
pub mod data;
pub mod domain;
pub mod filter;
pub mod format;
pub mod metrics;
pub mod report;
pub mod session;

pub use aggregate::{AggregateRow, AggregationTable, HourFill};
pub use config::{ConfigError, DashboardConfig};
pub use data::DataError;
pub use domain::{Dataset, OrderId, SalesRecord};
pub use filter::{FilterOptions, FilterSpec, FilteredView};
pub use metrics::Kpis;
pub use report::{DashboardReport, ReportOptions};
pub use session::Session;
