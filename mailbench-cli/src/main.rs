use std::process;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use mailbench_data::{convert, lookup, BenchmarkRecord, Currency, Industry};
use mailbench_engine::format::{format_difference, format_metric_value};
use mailbench_engine::metrics_loader::{load_submissions_file, Submission};
use mailbench_engine::{
    chart_series, compare, Assessment, ChartPoint, ComparisonResult, EngineError, MetricKind,
    UserMetrics,
};

/// Compare email campaign metrics against Klaviyo 2023 industry benchmarks.
#[derive(Parser)]
#[command(name = "mailbench", version, about)]
struct Cli {
    /// Output as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare one set of metrics
    Compare {
        /// Industry label or slug, e.g. "All ecommerce" or health-and-beauty
        #[arg(short, long)]
        industry: Industry,
        /// Open rate in percent (18.9 = 18.9%)
        #[arg(long)]
        open_rate: f64,
        /// Click rate in percent
        #[arg(long)]
        click_rate: f64,
        /// Placed order rate in percent
        #[arg(long)]
        placed_order_rate: f64,
        /// Revenue per recipient, in --currency
        #[arg(long)]
        revenue: f64,
        #[arg(short, long, default_value = "USD")]
        currency: Currency,
    },
    /// Compare every row of a submissions CSV
    Batch {
        /// CSV with label,industry,currency,open_rate_pct,click_rate_pct,placed_order_rate_pct,rev_per_recipient
        path: String,
    },
    /// Print the benchmark table
    Industries {
        #[arg(short, long, default_value = "USD")]
        currency: Currency,
    },
    /// Convert a USD amount into another currency
    Convert {
        amount: f64,
        #[arg(short, long)]
        currency: Currency,
    },
}

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ReportJson {
    label: Option<String>,
    industry: Industry,
    currency: Currency,
    results: Vec<ComparisonResult>,
    assessment: AssessmentJson,
    chart: Vec<ChartPoint>,
}

#[derive(Debug, Serialize)]
struct AssessmentJson {
    #[serde(flatten)]
    summary: Assessment,
    title: &'static str,
    description: String,
}

#[derive(Serialize)]
struct RejectedJson {
    label: String,
    error: String,
}

#[derive(Serialize)]
struct CompareDocJson {
    generated_at: String,
    report: ReportJson,
}

#[derive(Serialize)]
struct BatchDocJson {
    generated_at: String,
    source: String,
    reports: Vec<ReportJson>,
    rejected: Vec<RejectedJson>,
}

#[derive(Serialize)]
struct IndustryJson {
    industry: Industry,
    label: &'static str,
    benchmarks: BenchmarkRecord,
}

#[derive(Serialize)]
struct TableDocJson {
    generated_at: String,
    currency: Currency,
    industries: Vec<IndustryJson>,
}

#[derive(Serialize)]
struct ConvertJson {
    amount_usd: f64,
    currency: Currency,
    rate: f64,
    converted: f64,
}

fn build_report(
    label: Option<String>,
    industry: Industry,
    currency: Currency,
    results: [ComparisonResult; 4],
) -> ReportJson {
    let assessment = Assessment::from_results(&results);
    ReportJson {
        label,
        industry,
        currency,
        results: results.to_vec(),
        assessment: AssessmentJson {
            summary: assessment,
            title: assessment.verdict.title(),
            description: assessment.description(),
        },
        chart: chart_series(&results),
    }
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn print_json<T: Serialize>(doc: &T) {
    match serde_json::to_string_pretty(doc) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn print_report(report: &ReportJson) {
    println!();
    match &report.label {
        Some(label) => println!("  {} \u{00b7} {} benchmarks ({})", label, report.industry, report.currency),
        None => println!("  {} benchmarks ({})", report.industry, report.currency),
    }
    println!("  {:\u{2500}<64}", "");
    println!("  {:24} {:>12} {:>12}  {}", "Metric", "Yours", "Benchmark", "Difference");
    for r in &report.results {
        let icon = if r.is_above_benchmark { "\u{2191}" } else { "\u{2193}" };
        println!(
            "  {:24} {:>12} {:>12}  {} {}",
            r.metric.display_name(),
            format_metric_value(r.metric, r.user_value, report.currency),
            format_metric_value(r.metric, r.benchmark_value, report.currency),
            icon,
            format_difference(r),
        );
    }
    println!("  {:\u{2500}<64}", "");

    let a = &report.assessment;
    println!(
        "  Overall {:.0}% \u{00b7} {} \u{00b7} {}",
        a.summary.overall_score, a.summary.level, a.title
    );
    println!("  {}", a.description);
    println!();
}

fn print_table(currency: Currency) {
    println!();
    println!(
        "  {:26} {:>10} {:>10} {:>12} {:>12}",
        "Industry",
        MetricKind::OpenRate.display_name(),
        MetricKind::ClickRate.display_name(),
        "Order Rate",
        format!("Rev/Recip ({})", currency),
    );
    println!("  {:\u{2500}<74}", "");
    for industry in Industry::ALL {
        let rec = lookup(industry);
        println!(
            "  {:26} {:>10} {:>10} {:>12} {:>12}",
            industry.label(),
            format_metric_value(MetricKind::OpenRate, rec.open_rate, currency),
            format_metric_value(MetricKind::ClickRate, rec.click_rate, currency),
            format_metric_value(MetricKind::PlacedOrderRate, rec.placed_order_rate, currency),
            format_metric_value(
                MetricKind::RevenuePerRecipient,
                convert(rec.rev_per_recipient, currency),
                currency
            ),
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run_compare(json: bool, industry: Industry, metrics: UserMetrics, currency: Currency) -> Result<(), EngineError> {
    let results = compare(industry, &metrics, currency)?;
    let report = build_report(None, industry, currency, results);
    if json {
        print_json(&CompareDocJson {
            generated_at: now(),
            report,
        });
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Compare one CSV row. Tag and range errors reject the row only.
fn compare_submission(sub: &Submission) -> Result<ReportJson, EngineError> {
    let (industry, currency, metrics) = sub.resolve()?;
    let results = compare(industry, &metrics, currency)?;
    Ok(build_report(Some(sub.label.clone()), industry, currency, results))
}

/// Split a batch into reports and rejected rows. Never fails as a whole.
fn compare_batch(submissions: &[Submission]) -> (Vec<ReportJson>, Vec<RejectedJson>) {
    let mut reports = Vec::new();
    let mut rejected = Vec::new();
    for sub in submissions {
        match compare_submission(sub) {
            Ok(report) => reports.push(report),
            Err(e) => {
                log::warn!("rejected submission '{}': {}", sub.label, e);
                rejected.push(RejectedJson {
                    label: sub.label.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
    (reports, rejected)
}

fn run_batch(json: bool, path: &str) -> Result<(), EngineError> {
    let submissions = load_submissions_file(path)?;
    log::info!("loaded {} submissions from {}", submissions.len(), path);

    let (reports, rejected) = compare_batch(&submissions);

    if json {
        print_json(&BatchDocJson {
            generated_at: now(),
            source: path.to_string(),
            reports,
            rejected,
        });
    } else {
        for report in &reports {
            print_report(report);
        }
        println!(
            "  {} submissions \u{00b7} {} compared \u{00b7} {} rejected",
            submissions.len(),
            reports.len(),
            rejected.len()
        );
        for r in &rejected {
            println!("    {}: {}", r.label, r.error);
        }
        println!();
    }
    Ok(())
}

fn run_industries(json: bool, currency: Currency) {
    if json {
        let industries = Industry::ALL
            .into_iter()
            .map(|industry| {
                let mut benchmarks = lookup(industry);
                benchmarks.rev_per_recipient = convert(benchmarks.rev_per_recipient, currency);
                IndustryJson {
                    industry,
                    label: industry.label(),
                    benchmarks,
                }
            })
            .collect();
        print_json(&TableDocJson {
            generated_at: now(),
            currency,
            industries,
        });
    } else {
        print_table(currency);
    }
}

fn run_convert(json: bool, amount: f64, currency: Currency) {
    let converted = convert(amount, currency);
    if json {
        print_json(&ConvertJson {
            amount_usd: amount,
            currency,
            rate: currency.rate(),
            converted,
        });
    } else {
        println!(
            "  ${:.2} USD = {}{:.2} {} (rate {})",
            amount,
            currency.symbol(),
            converted,
            currency,
            currency.rate()
        );
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let outcome = match cli.command {
        Command::Compare {
            industry,
            open_rate,
            click_rate,
            placed_order_rate,
            revenue,
            currency,
        } => {
            let metrics = UserMetrics::from_percentages(open_rate, click_rate, placed_order_rate, revenue);
            run_compare(cli.json, industry, metrics, currency)
        }
        Command::Batch { path } => run_batch(cli.json, &path),
        Command::Industries { currency } => {
            run_industries(cli.json, currency);
            Ok(())
        }
        Command::Convert { amount, currency } => {
            run_convert(cli.json, amount, currency);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
