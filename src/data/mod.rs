//! Data module - aggregate counts and metrics loading

mod counts;
mod loader;
mod metrics;

pub use counts::{AggregateCounts, INDIVIDUALS_CATEGORY, TOPICS_CATEGORY};
pub use loader::{distribute, CountsLoader, LoadError};
pub use metrics::{parse_metrics, series_feed, MetricsLoader, REQUESTS_TOTAL};
