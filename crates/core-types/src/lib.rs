pub mod metric;
pub mod stock;

// Re-export the core types to provide a clean public API.
pub use metric::{Metric, NormalizationFactor};
pub use stock::{ScoredStock, StockRecord, UNKNOWN_SENTINELS};
