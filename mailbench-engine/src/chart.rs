//! Chart-ready series derived from comparison results.
//!
//! Rendering happens elsewhere; this only scales values for display (rates
//! become percentages, revenue stays in currency units) and tags each bar.

use serde::Serialize;

use crate::types::ComparisonResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Above,
    Below,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub user: f64,
    pub benchmark: f64,
    pub position: Position,
}

pub fn chart_series(results: &[ComparisonResult]) -> Vec<ChartPoint> {
    results
        .iter()
        .map(|r| {
            let scale = if r.metric.is_rate() { 100.0 } else { 1.0 };
            ChartPoint {
                label: r.metric.display_name(),
                user: r.user_value * scale,
                benchmark: r.benchmark_value * scale,
                position: if r.is_above_benchmark {
                    Position::Above
                } else {
                    Position::Below
                },
            }
        })
        .collect()
}
