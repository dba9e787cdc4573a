//! End-to-end comparison scenarios.
//!
//! Validates that:
//! 1. Results always come back in the fixed metric order
//! 2. Percentage differences match hand-computed values
//! 3. Equality is never reported as above benchmark
//! 4. Revenue is compared in the requested currency
//! 5. Batch CSV input flows through to assessments

use mailbench_engine::format::{format_difference, format_metric_value};
use mailbench_engine::metrics_loader::load_submissions_file;
use mailbench_engine::*;

const TOLERANCE: f64 = 0.01;

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn sample_metrics() -> UserMetrics {
    UserMetrics::new(0.20, 0.01, 0.0032, 0.15)
}

// ---------------------------------------------------------------------------
// Ordering and policies
// ---------------------------------------------------------------------------

#[test]
fn results_follow_fixed_order_for_every_industry() {
    for industry in Industry::ALL {
        for currency in Currency::ALL {
            let results = compare(industry, &sample_metrics(), currency).unwrap();
            let order: Vec<MetricKind> = results.iter().map(|r| r.metric).collect();
            assert_eq!(order, MetricKind::ALL.to_vec());
        }
    }
}

#[test]
fn above_iff_strictly_greater() {
    for industry in Industry::ALL {
        let results = compare_usd(industry, &sample_metrics()).unwrap();
        for r in results {
            assert_eq!(r.is_above_benchmark, r.user_value > r.benchmark_value);
        }
    }
}

#[test]
fn typed_benchmark_percentages_are_not_above() {
    for industry in Industry::ALL {
        let record = mailbench_data::lookup(industry);
        // What a user reads off the published table, e.g. "17.6" for 0.176.
        let typed = |rate: f64| -> f64 { format!("{:.2}", rate * 100.0).parse().unwrap() };
        let metrics = UserMetrics::from_percentages(
            typed(record.open_rate),
            typed(record.click_rate),
            typed(record.placed_order_rate),
            record.rev_per_recipient,
        );

        let results = compare_usd(industry, &metrics).unwrap();
        for r in results {
            assert!(
                !r.is_above_benchmark,
                "{industry} {}: typed {} vs {} reported above",
                r.metric, r.user_value, r.benchmark_value
            );
            assert_eq!(r.percentage_difference, 0.0, "{industry} {}", r.metric);
        }
        assert_eq!(Assessment::from_results(&results).verdict, Verdict::AllBelow);
    }
}

#[test]
fn compare_usd_matches_explicit_usd() {
    let a = compare_usd(Industry::FoodAndBeverage, &sample_metrics()).unwrap();
    let b = compare(Industry::FoodAndBeverage, &sample_metrics(), Currency::USD).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn all_ecommerce_usd_scenario() {
    let results = compare_usd(Industry::AllEcommerce, &sample_metrics()).unwrap();

    let open = results[0];
    assert!(open.is_above_benchmark);
    assert!((open.percentage_difference - 5.82).abs() < TOLERANCE);

    let click = results[1];
    assert!(!click.is_above_benchmark);
    assert!((click.percentage_difference - (-24.24)).abs() < TOLERANCE);

    // Equal to the benchmark: zero difference and not above.
    let placed = results[2];
    assert!(!placed.is_above_benchmark);
    assert_eq!(placed.percentage_difference, 0.0);

    let rev = results[3];
    assert!(rev.is_above_benchmark);
    assert!((rev.percentage_difference - 36.36).abs() < TOLERANCE);

    let assessment = Assessment::from_results(&results);
    assert_eq!(assessment.above_count, 2);
    assert_eq!(assessment.level, PerformanceLevel::Moderate);
    assert_eq!(assessment.verdict, Verdict::Mixed);
}

#[test]
fn eur_revenue_scenario() {
    let metrics = UserMetrics::new(0.20, 0.01, 0.0032, 0.12);
    let results = compare(Industry::AllEcommerce, &metrics, Currency::EUR).unwrap();

    let rev = results[3];
    assert!((rev.benchmark_value - 0.1001).abs() < 1e-9);
    assert!(rev.is_above_benchmark);
    assert!((rev.percentage_difference - 19.88).abs() < TOLERANCE);
    assert_eq!(
        format_metric_value(rev.metric, rev.benchmark_value, Currency::EUR),
        "€0.10"
    );
    assert_eq!(format_difference(&rev), "19.9% Above");
}

#[test]
fn out_of_range_input_is_rejected() {
    let too_high = UserMetrics::new(18.9, 0.01, 0.0032, 0.15);
    let err = compare_usd(Industry::AllEcommerce, &too_high).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidInput { metric: MetricKind::OpenRate, .. }
    ));
}

#[test]
fn results_serialize_with_raw_fields() {
    let results = compare_usd(Industry::AllEcommerce, &sample_metrics()).unwrap();
    let json = serde_json::to_value(results[3]).unwrap();
    assert_eq!(json["metric"], "RevenuePerRecipient");
    assert_eq!(json["user_value"], 0.15);
    assert_eq!(json["benchmark_value"], 0.11);
    assert_eq!(json["is_above_benchmark"], true);
}

// ---------------------------------------------------------------------------
// Batch input
// ---------------------------------------------------------------------------

#[test]
fn sample_batch_compares_valid_rows_and_rejects_typo() {
    let submissions = load_submissions_file(&fixture("sample_submissions.csv")).unwrap();
    assert_eq!(submissions.len(), 6);

    let mut compared = 0;
    let mut rejected = Vec::new();
    for sub in &submissions {
        let (industry, currency, metrics) = sub.resolve().unwrap();
        match compare(industry, &metrics, currency) {
            Ok(results) => {
                compared += 1;
                assert_eq!(chart_series(&results).len(), 4);
            }
            Err(EngineError::InvalidInput { .. }) => rejected.push(sub.label.clone()),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(compared, 5);
    assert_eq!(rejected, vec!["typo-row".to_string()]);
}
