//! Text and CSV report output for clustering commands

use std::{fmt::Write as _, path::Path};

use anyhow::Context as _;
use fightlog_analysis::{
    clustering::ClusterAssignment,
    feature::{FeatureMatrix, FightMetric},
    summary::ClusterSummary,
};
use ndarray::Array2;

use crate::util;

/// Print per-cluster summary tables to stdout.
pub(crate) fn print_cluster_summaries(summaries: &[ClusterSummary]) {
    for summary in summaries {
        println!();
        println!(
            "=== {} ({} fights, {:.1}% of corpus) ===",
            summary.label,
            summary.size,
            summary.share * 100.0
        );
        println!(
            "{:<24} {:>12} {:>12} {:>12} {:>12}",
            "metric", "mean", "std_dev", "min", "max"
        );
        for (metric, stats) in &summary.metric_stats {
            println!(
                "{:<24} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
                metric.id(),
                stats.mean,
                stats.std_dev,
                stats.min,
                stats.max
            );
        }
        println!("Source folders:");
        for (source, count) in &summary.source_counts {
            println!("  {source:<20} {count}");
        }
    }
}

/// Save cluster summaries in long CSV form, one row per cluster and metric.
pub(crate) fn save_summary_csv(path: &Path, summaries: &[ClusterSummary]) -> anyhow::Result<()> {
    let mut csv = String::from("cluster,size,share,metric,mean,std_dev,min,max\n");
    for summary in summaries {
        for (metric, stats) in &summary.metric_stats {
            writeln!(
                &mut csv,
                "{},{},{:.6},{},{},{},{},{}",
                summary.label,
                summary.size,
                summary.share,
                metric.id(),
                stats.mean,
                stats.std_dev,
                stats.min,
                stats.max
            )
            .with_context(|| format!("Failed to format summary row for {}", summary.label))?;
        }
    }
    util::write_text_file(path, &csv)?;
    println!("Cluster summary saved to: {}", path.display());
    Ok(())
}

/// Save the per-fight cluster assignment, noise rows labeled `noise`.
pub(crate) fn save_assignments_csv(
    path: &Path,
    matrix: &FeatureMatrix,
    assignment: &ClusterAssignment,
) -> anyhow::Result<()> {
    let mut csv = String::from("path,source,cluster\n");
    for (row, label) in assignment.labels.iter().enumerate() {
        let cluster = label.map_or_else(|| "noise".to_owned(), |index| index.to_string());
        writeln!(
            &mut csv,
            "{},{},{}",
            matrix.paths[row].display(),
            matrix.sources[row],
            cluster
        )
        .with_context(|| format!("Failed to format assignment row {row}"))?;
    }
    util::write_text_file(path, &csv)?;
    println!("Cluster assignments saved to: {}", path.display());
    Ok(())
}

/// Save 2-D embedding coordinates with per-fight provenance.
pub(crate) fn save_coords_csv(
    path: &Path,
    matrix: &FeatureMatrix,
    coords: &Array2<f64>,
) -> anyhow::Result<()> {
    let mut csv = String::from("path,source,x,y\n");
    for row in 0..coords.nrows() {
        writeln!(
            &mut csv,
            "{},{},{},{}",
            matrix.paths[row].display(),
            matrix.sources[row],
            coords[[row, 0]],
            coords[[row, 1]]
        )
        .with_context(|| format!("Failed to format coordinate row {row}"))?;
    }
    util::write_text_file(path, &csv)?;
    println!("Embedding coordinates saved to: {}", path.display());
    Ok(())
}

/// Print a metric-value histogram of counts per label, largest bar scaled to
/// `width` characters.
pub(crate) fn print_count_histogram<'a>(
    rows: impl IntoIterator<Item = (&'a str, usize)>,
    width: usize,
) {
    let rows: Vec<_> = rows.into_iter().collect();
    let max_count = rows.iter().map(|&(_, count)| count).max().unwrap_or(0);
    for (label, count) in rows {
        let bar_width = if max_count == 0 {
            0
        } else {
            (count * width).div_ceil(max_count)
        };
        println!("{:>20} | {:<6} {}", label, count, "#".repeat(bar_width));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use fightlog_analysis::summary::summarize;
    use ndarray::Array2;
    use tempfile::TempDir;

    use super::*;

    fn matrix() -> FeatureMatrix {
        let records = Array2::from_shape_vec(
            (2, 7),
            vec![
                10.0, 2.0, 20.0, 10.0, 1.0, 10.0, 1.0, //
                100.0, 20.0, 400.0, 220.0, 11.0, 180.0, 9.0, //
            ],
        )
        .unwrap();
        FeatureMatrix {
            records,
            sources: vec!["batch_a".to_owned(), "batch_b".to_owned()],
            paths: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
        }
    }

    #[test]
    fn test_summary_csv_has_row_per_cluster_and_metric() {
        let matrix = matrix();
        let assignment = ClusterAssignment {
            labels: vec![Some(0), Some(1)],
            n_clusters: 2,
        };
        let summaries = summarize(&matrix, &assignment);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.csv");
        save_summary_csv(&path, &summaries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "cluster,size,share,metric,mean,std_dev,min,max");
        assert_eq!(lines.len(), 1 + 2 * FightMetric::ALL.len());
        assert!(lines[1].starts_with("cluster 0,1,"));
    }

    #[test]
    fn test_assignments_csv_labels_noise() {
        let matrix = matrix();
        let assignment = ClusterAssignment {
            labels: vec![Some(0), None],
            n_clusters: 1,
        };

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assignments.csv");
        save_assignments_csv(&path, &matrix, &assignment).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "path,source,cluster");
        assert_eq!(lines[1], "a.json,batch_a,0");
        assert_eq!(lines[2], "b.json,batch_b,noise");
    }

    #[test]
    fn test_coords_csv_matches_rows() {
        let matrix = matrix();
        let coords = ndarray::array![[0.5, -1.5], [2.0, 3.0]];

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coords.csv");
        save_coords_csv(&path, &matrix, &coords).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "path,source,x,y");
        assert_eq!(lines[1], "a.json,batch_a,0.5,-1.5");
        assert_eq!(lines[2], "b.json,batch_b,2,3");
    }
}
