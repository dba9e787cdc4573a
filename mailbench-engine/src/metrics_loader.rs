//! CSV loader for batches of metric submissions.
//!
//! Expected columns:
//!   label, industry, currency, open_rate_pct, click_rate_pct,
//!   placed_order_rate_pct, rev_per_recipient
//!
//! Rates are entered in percent, as on the calculator form. An empty
//! currency means USD.

use std::io::Read;

use serde::Deserialize;

use mailbench_data::{Currency, Industry, TableResult};

use crate::error::{EngineError, EngineResult};
use crate::types::UserMetrics;

/// One raw CSV row, before the industry and currency tags are resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub label: String,
    pub industry: String,
    #[serde(default)]
    pub currency: Option<String>,
    pub open_rate_pct: f64,
    pub click_rate_pct: f64,
    pub placed_order_rate_pct: f64,
    pub rev_per_recipient: f64,
}

impl Submission {
    /// Resolve tags and normalize rates to decimal fractions.
    ///
    /// Range checks are left to the comparison itself.
    pub fn resolve(&self) -> TableResult<(Industry, Currency, UserMetrics)> {
        let industry = self.industry.parse::<Industry>()?;
        let currency = match self.currency.as_deref().map(str::trim) {
            None | Some("") => Currency::USD,
            Some(code) => code.parse::<Currency>()?,
        };
        let metrics = UserMetrics::from_percentages(
            self.open_rate_pct,
            self.click_rate_pct,
            self.placed_order_rate_pct,
            self.rev_per_recipient,
        );
        Ok((industry, currency, metrics))
    }
}

/// Load submissions from a CSV reader.
pub fn load_submissions<R: Read>(reader: R) -> EngineResult<Vec<Submission>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut submissions = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let submission: Submission = result.map_err(|source| EngineError::Csv {
            line: line_num + 2,
            source,
        })?;
        submissions.push(submission);
    }

    log::debug!("loaded {} submissions", submissions.len());
    Ok(submissions)
}

/// Load submissions from a CSV file path.
pub fn load_submissions_file(path: &str) -> EngineResult<Vec<Submission>> {
    let file = std::fs::File::open(path).map_err(|source| EngineError::Io {
        path: path.to_string(),
        source,
    })?;
    load_submissions(file)
}
