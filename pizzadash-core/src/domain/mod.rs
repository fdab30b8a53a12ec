//! Domain types for the sales dashboard

pub mod ids;
pub mod record;

pub use ids::OrderId;
pub use record::{Dataset, SalesRecord};
