//! Metric-by-metric comparison against industry benchmarks.
//!
//! Two policies are pinned here and covered by tests:
//! - a zero benchmark yields a 0% difference, never NaN or infinity
//! - a metric equal to its benchmark is not "above" it

use mailbench_data::{convert, lookup, Currency, Industry, MetricKind};

use crate::error::EngineResult;
use crate::types::{ComparisonResult, UserMetrics};

/// Relative deviation of `user` from `benchmark`, in percent.
pub fn percentage_difference(user: f64, benchmark: f64) -> f64 {
    if benchmark == 0.0 {
        return 0.0;
    }
    ((user - benchmark) / benchmark) * 100.0
}

/// Compare `metrics` against the `industry` benchmarks.
///
/// Rates are compared as decimal fractions. Revenue per recipient is compared
/// in `currency`: the USD benchmark is converted, the user value is taken as
/// already being in `currency`. Results come back in `MetricKind::ALL` order.
///
/// Input is validated first; on error nothing is computed.
pub fn compare(
    industry: Industry,
    metrics: &UserMetrics,
    currency: Currency,
) -> EngineResult<[ComparisonResult; 4]> {
    metrics.validate()?;

    let record = lookup(industry);
    let results = MetricKind::ALL.map(|metric| {
        let benchmark_value = match metric {
            MetricKind::RevenuePerRecipient => convert(record.rev_per_recipient, currency),
            rate => record.value(rate),
        };
        let user_value = metrics.value(metric);
        ComparisonResult {
            metric,
            user_value,
            benchmark_value,
            percentage_difference: percentage_difference(user_value, benchmark_value),
            is_above_benchmark: user_value > benchmark_value,
        }
    });

    log::debug!(
        "compared {} metrics against {} ({}): {} above benchmark",
        results.len(),
        industry,
        currency,
        results.iter().filter(|r| r.is_above_benchmark).count()
    );

    Ok(results)
}

/// [`compare`] in the base currency.
pub fn compare_usd(industry: Industry, metrics: &UserMetrics) -> EngineResult<[ComparisonResult; 4]> {
    compare(industry, metrics, Currency::USD)
}
