//! Comparison engine for email marketing benchmarks.
//!
//! Takes a sender's four campaign metrics, validates them, and compares each
//! against the industry benchmark from `mailbench-data`. Everything here is a
//! pure function of its inputs.

pub mod assessment;
pub mod chart;
pub mod comparison;
pub mod error;
pub mod format;
pub mod metrics_loader;
pub mod types;

pub use assessment::{Assessment, PerformanceLevel, Verdict};
pub use chart::{chart_series, ChartPoint, Position};
pub use comparison::{compare, compare_usd, percentage_difference};
pub use error::{EngineError, EngineResult};
pub use types::{ComparisonResult, UserMetrics};

pub use mailbench_data::{Currency, Industry, MetricKind};
