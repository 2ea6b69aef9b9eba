//! Per-cluster summary statistics
//!
//! Groups the rows of a feature matrix by cluster assignment and computes
//! descriptive statistics per metric plus a per-source-folder membership
//! breakdown for each group. Statistics are computed over the *raw* matrix so
//! the reported values stay in metric units even when clustering ran on
//! standardized data.

use std::{collections::BTreeMap, fmt};

use fightlog_stats::descriptive::DescriptiveStats;

use crate::{
    clustering::ClusterAssignment,
    feature::{FeatureMatrix, FightMetric},
};

/// Identity of a summary group: a numbered cluster or the DBSCAN noise bucket.
///
/// Noise sorts after all clusters, so reports list it last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClusterLabel {
    Cluster(usize),
    Noise,
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterLabel::Cluster(index) => write!(f, "cluster {index}"),
            ClusterLabel::Noise => write!(f, "noise"),
        }
    }
}

/// Summary of one cluster (or the noise group).
#[derive(Debug, Clone)]
pub struct ClusterSummary {
    pub label: ClusterLabel,
    /// Number of fights in the group
    pub size: usize,
    /// Fraction of the corpus in the group
    pub share: f64,
    /// Descriptive statistics per metric, in feature-vector order
    pub metric_stats: Vec<(FightMetric, DescriptiveStats)>,
    /// Membership count per source folder
    pub source_counts: BTreeMap<String, usize>,
}

/// Summarize a cluster assignment over the raw feature matrix.
///
/// Returns one summary per observed group, clusters first in index order,
/// noise last. Empty k-means clusters produce no summary.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn summarize(matrix: &FeatureMatrix, assignment: &ClusterAssignment) -> Vec<ClusterSummary> {
    let mut groups: BTreeMap<ClusterLabel, Vec<usize>> = BTreeMap::new();
    for (row, label) in assignment.labels.iter().enumerate() {
        let label = label.map_or(ClusterLabel::Noise, ClusterLabel::Cluster);
        groups.entry(label).or_default().push(row);
    }

    let total = matrix.num_fights();
    groups
        .into_iter()
        .map(|(label, rows)| {
            let metric_stats = FightMetric::ALL
                .iter()
                .map(|&metric| {
                    let values = rows
                        .iter()
                        .map(|&row| matrix.records[[row, metric.column()]]);
                    // Groups are built from observed rows, so never empty.
                    (metric, DescriptiveStats::new(values).unwrap())
                })
                .collect();

            let mut source_counts = BTreeMap::new();
            for &row in &rows {
                *source_counts.entry(matrix.sources[row].clone()).or_insert(0) += 1;
            }

            ClusterSummary {
                label,
                size: rows.len(),
                share: rows.len() as f64 / total as f64,
                metric_stats,
                source_counts,
            }
        })
        .collect()
}
