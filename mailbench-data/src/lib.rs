//! Static benchmark data for email marketing performance.
//!
//! Two read-only tables live here:
//! - per-industry benchmarks (Klaviyo 2023 figures), keyed by [`Industry`]
//! - USD exchange rates, keyed by [`Currency`]
//!
//! Both are exhaustive `match` expressions over closed enums, so adding an
//! industry or currency without data is a compile error rather than a
//! runtime "unknown key".

pub mod benchmarks;
pub mod currency;
pub mod error;
pub mod industry;
pub mod metric;

pub use benchmarks::{lookup, lookup_by_name, BenchmarkRecord};
pub use currency::{convert, convert_to_usd, Currency};
pub use error::{TableError, TableResult};
pub use industry::Industry;
pub use metric::MetricKind;
