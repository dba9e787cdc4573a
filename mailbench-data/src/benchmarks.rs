//! Per-industry benchmark table (Klaviyo 2023 email benchmarks).
//!
//! Rates are decimal fractions (0.189 = 18.9%). Revenue per recipient is in
//! USD; convert with [`crate::currency::convert`] before comparing against
//! amounts in another currency.

use serde::Serialize;

use crate::error::TableResult;
use crate::industry::Industry;
use crate::metric::MetricKind;

/// Benchmark values for one industry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub open_rate: f64,
    pub click_rate: f64,
    pub placed_order_rate: f64,
    /// USD.
    pub rev_per_recipient: f64,
}

impl BenchmarkRecord {
    pub fn value(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::OpenRate => self.open_rate,
            MetricKind::ClickRate => self.click_rate,
            MetricKind::PlacedOrderRate => self.placed_order_rate,
            MetricKind::RevenuePerRecipient => self.rev_per_recipient,
        }
    }
}

/// Benchmark record for `industry`. Total over the enum.
pub fn lookup(industry: Industry) -> BenchmarkRecord {
    match industry {
        Industry::AllEcommerce => BenchmarkRecord {
            open_rate: 0.189,
            click_rate: 0.0132,
            placed_order_rate: 0.0032,
            rev_per_recipient: 0.11,
        },
        Industry::ApparelAndAccessories => BenchmarkRecord {
            open_rate: 0.176,
            click_rate: 0.0115,
            placed_order_rate: 0.0034,
            rev_per_recipient: 0.11,
        },
        Industry::FoodAndBeverage => BenchmarkRecord {
            open_rate: 0.188,
            click_rate: 0.0111,
            placed_order_rate: 0.0030,
            rev_per_recipient: 0.10,
        },
        Industry::HealthAndBeauty => BenchmarkRecord {
            open_rate: 0.192,
            click_rate: 0.0136,
            placed_order_rate: 0.0033,
            rev_per_recipient: 0.10,
        },
        Industry::Jewelry => BenchmarkRecord {
            open_rate: 0.168,
            click_rate: 0.0110,
            placed_order_rate: 0.0030,
            rev_per_recipient: 0.13,
        },
        Industry::Other => BenchmarkRecord {
            open_rate: 0.194,
            click_rate: 0.0143,
            placed_order_rate: 0.0031,
            rev_per_recipient: 0.11,
        },
    }
}

/// String-keyed lookup; fails with `UnknownIndustry` for tags outside the set.
pub fn lookup_by_name(name: &str) -> TableResult<BenchmarkRecord> {
    Ok(lookup(name.parse::<Industry>()?))
}
