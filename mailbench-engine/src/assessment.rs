//! Overall verdict across all compared metrics.

use std::fmt;

use serde::Serialize;

use crate::types::ComparisonResult;

/// Banding of the overall score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PerformanceLevel {
    Exceptional,
    Strong,
    Moderate,
    NeedsImprovement,
    Poor,
}

impl PerformanceLevel {
    /// `score` is the percentage of metrics above benchmark.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 100.0 => PerformanceLevel::Exceptional,
            s if s >= 75.0 => PerformanceLevel::Strong,
            s if s >= 50.0 => PerformanceLevel::Moderate,
            s if s >= 25.0 => PerformanceLevel::NeedsImprovement,
            _ => PerformanceLevel::Poor,
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceLevel::Exceptional => write!(f, "Exceptional"),
            PerformanceLevel::Strong => write!(f, "Strong"),
            PerformanceLevel::Moderate => write!(f, "Moderate"),
            PerformanceLevel::NeedsImprovement => write!(f, "Needs Improvement"),
            PerformanceLevel::Poor => write!(f, "Poor"),
        }
    }
}

/// Headline shown after a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Verdict {
    AllAbove,
    Mixed,
    AllBelow,
}

impl Verdict {
    pub fn title(self) -> &'static str {
        match self {
            Verdict::AllAbove => "Excellent Performance!",
            Verdict::Mixed => "Mixed Results",
            Verdict::AllBelow => "Room for Improvement",
        }
    }
}

/// Summary of a comparison: how many metrics beat their benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Assessment {
    pub above_count: usize,
    pub total: usize,
    /// Percentage of metrics above benchmark (0 when there are none).
    pub overall_score: f64,
    pub level: PerformanceLevel,
    pub verdict: Verdict,
}

impl Assessment {
    pub fn from_results(results: &[ComparisonResult]) -> Self {
        let total = results.len();
        let above_count = results.iter().filter(|r| r.is_above_benchmark).count();
        let overall_score = if total == 0 {
            0.0
        } else {
            above_count as f64 / total as f64 * 100.0
        };
        let verdict = if total > 0 && above_count == total {
            Verdict::AllAbove
        } else if above_count > 0 {
            Verdict::Mixed
        } else {
            Verdict::AllBelow
        };

        Self {
            above_count,
            total,
            overall_score,
            level: PerformanceLevel::from_score(overall_score),
            verdict,
        }
    }

    pub fn description(&self) -> String {
        match self.verdict {
            Verdict::AllAbove => "All your metrics are above industry benchmarks.".into(),
            Verdict::Mixed => format!(
                "{} of {} metrics are above industry benchmarks.",
                self.above_count, self.total
            ),
            Verdict::AllBelow => "All your metrics are below industry benchmarks.".into(),
        }
    }
}
