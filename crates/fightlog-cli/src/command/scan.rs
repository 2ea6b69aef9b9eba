use std::path::PathBuf;

use clap::Args;
use fightlog_analysis::feature::{FeatureMatrix, FightMetric};
use fightlog_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};

use crate::{report, util};

#[derive(Debug, Clone, Args)]
pub struct ScanArg {
    /// Directory tree containing fight record JSON files
    corpus: PathBuf,
}

const REPORT_PERCENTILES: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

pub fn run(arg: &ScanArg) -> anyhow::Result<()> {
    let corpus = util::load_corpus(&arg.corpus)?;

    println!("=== Fight Corpus Report ===");
    println!("Corpus root:    {}", arg.corpus.display());
    println!("Fight records:  {}", corpus.len());
    println!("Skipped files:  {}", corpus.skipped.len());

    if corpus.is_empty() {
        println!();
        println!("No parseable fight records found.");
        return Ok(());
    }

    println!();
    println!("Records per source folder:");
    let source_counts = corpus.source_counts();
    report::print_count_histogram(
        source_counts
            .iter()
            .map(|(source, &count)| (source.as_str(), count)),
        40,
    );

    if !corpus.skipped.is_empty() {
        println!();
        println!("Skipped files:");
        for skipped in &corpus.skipped {
            println!("  {}: {}", skipped.path.display(), skipped.reason);
        }
    }

    let matrix = FeatureMatrix::from_corpus(&corpus);
    println!();
    println!("Per-metric statistics:");
    println!(
        "{:<24} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "metric", "mean", "std_dev", "min", "median", "max"
    );
    for metric in FightMetric::ALL {
        let values = matrix.metric_values(metric);
        // The corpus is non-empty here, so stats always exist.
        let stats = DescriptiveStats::new(values.iter().copied()).unwrap();
        println!(
            "{:<24} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            metric.id(),
            stats.mean,
            stats.std_dev,
            stats.min,
            stats.median,
            stats.max
        );
    }

    println!();
    println!("Per-metric percentiles:");
    let header = REPORT_PERCENTILES
        .iter()
        .map(|p| format!("{:>9}", format!("p{p}")))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{:<24} {header}", "metric");
    for metric in FightMetric::ALL {
        let values = matrix.metric_values(metric);
        let percentiles = Percentiles::new(&values, &REPORT_PERCENTILES);
        let row = REPORT_PERCENTILES
            .iter()
            .filter_map(|&p| percentiles.get(p))
            .map(|value| format!("{value:>9.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<24} {row}", metric.id());
    }

    Ok(())
}
