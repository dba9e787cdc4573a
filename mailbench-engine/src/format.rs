//! Display strings for comparison results.

use mailbench_data::{Currency, MetricKind};

use crate::types::ComparisonResult;

/// Rates as a percentage with two decimals; revenue with the currency symbol.
pub fn format_metric_value(metric: MetricKind, value: f64, currency: Currency) -> String {
    if metric.is_rate() {
        format!("{:.2}%", value * 100.0)
    } else {
        format!("{}{:.2}", currency.symbol(), value)
    }
}

/// e.g. "5.8% Above" or "24.2% Below".
pub fn format_difference(result: &ComparisonResult) -> String {
    format!(
        "{:.1}% {}",
        result.percentage_difference.abs(),
        if result.is_above_benchmark { "Above" } else { "Below" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_render_as_percent() {
        assert_eq!(format_metric_value(MetricKind::OpenRate, 0.189, Currency::USD), "18.90%");
        assert_eq!(format_metric_value(MetricKind::PlacedOrderRate, 0.0032, Currency::EUR), "0.32%");
    }

    #[test]
    fn revenue_uses_currency_symbol() {
        assert_eq!(
            format_metric_value(MetricKind::RevenuePerRecipient, 0.11, Currency::USD),
            "$0.11"
        );
        assert_eq!(
            format_metric_value(MetricKind::RevenuePerRecipient, 0.1001, Currency::EUR),
            "€0.10"
        );
        assert_eq!(
            format_metric_value(MetricKind::RevenuePerRecipient, 0.1485, Currency::CAD),
            "C$0.15"
        );
    }

    #[test]
    fn difference_label() {
        let below = ComparisonResult {
            metric: MetricKind::ClickRate,
            user_value: 0.01,
            benchmark_value: 0.0132,
            percentage_difference: -24.2424,
            is_above_benchmark: false,
        };
        assert_eq!(format_difference(&below), "24.2% Below");

        let above = ComparisonResult {
            percentage_difference: 5.82,
            is_above_benchmark: true,
            ..below
        };
        assert_eq!(format_difference(&above), "5.8% Above");
    }
}
