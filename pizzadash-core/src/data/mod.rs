//! Data ingestion and normalization

pub mod loader;
pub mod normalize;

pub use loader::{load, load_reader, DataError, DEFAULT_DATA_PATH};
pub use normalize::{parse_order_date, parse_order_time};
