//! Fixed-order feature extraction from fight records
//!
//! Each fight record is flattened into a fixed-length numeric vector by field
//! lookup. The metric order is stable and part of the tool's contract: CSV
//! columns, summary tables, and the feature matrix all use it.

use std::path::PathBuf;

use ndarray::Array2;

use crate::{corpus::FightCorpus, record::EndLog};

/// One extractable metric of a fight record.
///
/// Metrics have a stable snake_case `id`, used in tables and CSV headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FightMetric {
    TotalTimeSteps,
    TotalActions,
    TotalDamageOut,
    Player1DamageOut,
    Player1TotalActions,
    Player2DamageOut,
    Player2TotalActions,
}

impl FightMetric {
    /// All metrics in feature-vector order.
    pub const ALL: [FightMetric; 7] = [
        FightMetric::TotalTimeSteps,
        FightMetric::TotalActions,
        FightMetric::TotalDamageOut,
        FightMetric::Player1DamageOut,
        FightMetric::Player1TotalActions,
        FightMetric::Player2DamageOut,
        FightMetric::Player2TotalActions,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            FightMetric::TotalTimeSteps => "total_time_steps",
            FightMetric::TotalActions => "total_actions",
            FightMetric::TotalDamageOut => "total_damage_out",
            FightMetric::Player1DamageOut => "player1_damage_out",
            FightMetric::Player1TotalActions => "player1_total_actions",
            FightMetric::Player2DamageOut => "player2_damage_out",
            FightMetric::Player2TotalActions => "player2_total_actions",
        }
    }

    /// Column index of this metric in the feature matrix.
    #[must_use]
    pub fn column(self) -> usize {
        self as usize
    }

    /// Extract this metric's value from a fight's end log.
    #[must_use]
    pub fn extract(self, end_log: &EndLog) -> f64 {
        match self {
            FightMetric::TotalTimeSteps => end_log.total_time_steps,
            FightMetric::TotalActions => end_log.total_actions,
            FightMetric::TotalDamageOut => end_log.total_damage_out,
            FightMetric::Player1DamageOut => end_log.player1_damage_out,
            FightMetric::Player1TotalActions => end_log.player1_total_actions,
            FightMetric::Player2DamageOut => end_log.player2_damage_out,
            FightMetric::Player2TotalActions => end_log.player2_total_actions,
        }
    }
}

/// The feature matrix of a corpus: one row per fight, one column per metric,
/// with per-row provenance kept alongside for labeling and reports.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    /// Raw metric values, `num_fights x FightMetric::ALL.len()`
    pub records: Array2<f64>,
    /// Source-folder label per row
    pub sources: Vec<String>,
    /// Originating file path per row
    pub paths: Vec<PathBuf>,
}

impl FeatureMatrix {
    /// Flatten a corpus into the feature matrix.
    ///
    /// Row order matches the corpus sample order.
    #[must_use]
    pub fn from_corpus(corpus: &FightCorpus) -> Self {
        let records = Array2::from_shape_fn(
            (corpus.samples.len(), FightMetric::ALL.len()),
            |(row, col)| FightMetric::ALL[col].extract(&corpus.samples[row].record.end_log),
        );
        let sources = corpus
            .samples
            .iter()
            .map(|sample| sample.source.clone())
            .collect();
        let paths = corpus
            .samples
            .iter()
            .map(|sample| sample.path.clone())
            .collect();
        Self {
            records,
            sources,
            paths,
        }
    }

    #[must_use]
    pub fn num_fights(&self) -> usize {
        self.records.nrows()
    }

    /// All values of one metric, in row order.
    #[must_use]
    pub fn metric_values(&self, metric: FightMetric) -> Vec<f64> {
        self.records.column(metric.column()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EndLog;

    fn end_log() -> EndLog {
        EndLog {
            winner: Some(1),
            total_time_steps: 1.0,
            total_actions: 2.0,
            total_damage_out: 3.0,
            player1_damage_out: 4.0,
            player1_total_actions: 5.0,
            player2_damage_out: 6.0,
            player2_total_actions: 7.0,
        }
    }

    #[test]
    fn test_extraction_order_is_fixed() {
        let end_log = end_log();
        let vector: Vec<f64> = FightMetric::ALL
            .iter()
            .map(|metric| metric.extract(&end_log))
            .collect();
        assert_eq!(vector, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_column_matches_all_order() {
        for (index, metric) in FightMetric::ALL.iter().enumerate() {
            assert_eq!(metric.column(), index);
        }
    }

    #[test]
    fn test_metric_ids_are_unique() {
        let mut ids: Vec<_> = FightMetric::ALL.iter().map(|m| m.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FightMetric::ALL.len());
    }
}
