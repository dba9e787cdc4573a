use serde::Serialize;

use mailbench_data::MetricKind;

use crate::error::{EngineError, EngineResult};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A sender's campaign metrics.
///
/// Rates are decimal fractions (1% == 0.01). Revenue per recipient is in
/// whatever currency the comparison is requested in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct UserMetrics {
    pub open_rate: f64,
    pub click_rate: f64,
    pub placed_order_rate: f64,
    pub rev_per_recipient: f64,
}

impl UserMetrics {
    pub fn new(open_rate: f64, click_rate: f64, placed_order_rate: f64, rev_per_recipient: f64) -> Self {
        Self {
            open_rate,
            click_rate,
            placed_order_rate,
            rev_per_recipient,
        }
    }

    /// Build from form-style input: rates in percent (18.5 -> 0.185),
    /// revenue as entered.
    pub fn from_percentages(
        open_rate_pct: f64,
        click_rate_pct: f64,
        placed_order_rate_pct: f64,
        rev_per_recipient: f64,
    ) -> Self {
        Self::new(
            percent_to_fraction(open_rate_pct),
            percent_to_fraction(click_rate_pct),
            percent_to_fraction(placed_order_rate_pct),
            rev_per_recipient,
        )
    }

    pub fn value(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::OpenRate => self.open_rate,
            MetricKind::ClickRate => self.click_rate,
            MetricKind::PlacedOrderRate => self.placed_order_rate,
            MetricKind::RevenuePerRecipient => self.rev_per_recipient,
        }
    }

    /// Reject out-of-range values. Checks metrics in output order and
    /// reports the first failure.
    pub fn validate(&self) -> EngineResult<()> {
        for metric in MetricKind::ALL {
            let value = self.value(metric);
            let reason = if !value.is_finite() {
                Some("must be a finite number")
            } else if metric.is_rate() && !(0.0..=1.0).contains(&value) {
                Some("rate must be between 0 and 1")
            } else if value < 0.0 {
                Some("must not be negative")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(EngineError::InvalidInput {
                    metric,
                    value,
                    reason,
                });
            }
        }
        Ok(())
    }
}

/// Shift the decimal point two places left, rounding once.
///
/// `percent_to_fraction(17.6) == 0.176` exactly; `17.6 / 100.0` is not.
pub fn percent_to_fraction(pct: f64) -> f64 {
    if !pct.is_finite() {
        return pct / 100.0;
    }
    format!("{pct}e-2").parse::<f64>().unwrap_or(pct / 100.0)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One metric compared against its benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub metric: MetricKind,
    pub user_value: f64,
    /// In the same unit as `user_value` (currency-converted for revenue).
    pub benchmark_value: f64,
    pub percentage_difference: f64,
    pub is_above_benchmark: bool,
}
