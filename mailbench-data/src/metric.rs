use std::fmt;

use serde::{Deserialize, Serialize};

/// The four campaign metrics that are benchmarked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    OpenRate,
    ClickRate,
    PlacedOrderRate,
    RevenuePerRecipient,
}

impl MetricKind {
    /// Fixed output order for comparisons and reports.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::OpenRate,
        MetricKind::ClickRate,
        MetricKind::PlacedOrderRate,
        MetricKind::RevenuePerRecipient,
    ];

    /// Rate metrics are decimal fractions in [0, 1]; the rest is money.
    pub fn is_rate(self) -> bool {
        !matches!(self, MetricKind::RevenuePerRecipient)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MetricKind::OpenRate => "Open Rate",
            MetricKind::ClickRate => "Click Rate",
            MetricKind::PlacedOrderRate => "Placed Order Rate",
            MetricKind::RevenuePerRecipient => "Revenue Per Recipient",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
