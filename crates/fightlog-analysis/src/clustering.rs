//! Clustering of the feature matrix
//!
//! Two algorithms are supported, both delegated to `linfa-clustering`:
//!
//! - **k-means**: partitions every fight into exactly `k` clusters; centroid
//!   initialization is seeded so repeated runs are reproducible.
//! - **DBSCAN**: density-based clustering; the cluster count falls out of the
//!   data, and low-density fights are reported as *noise* instead of being
//!   forced into a cluster. Noise is how outlier fights surface.
//!
//! Both run over the standardized matrix; summaries are computed over the raw
//! matrix afterwards so the reported statistics stay in metric units.

use linfa::{
    DatasetBase,
    traits::{Fit, Predict, Transformer},
};
use linfa_clustering::{Dbscan, KMeans};
use ndarray::{Array1, Array2};
use rand_xoshiro::{Xoshiro256Plus, rand_core::SeedableRng};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ClusterError {
    #[display("empty feature matrix")]
    EmptyInput,
    #[display("cluster count {k} must be between 1 and the number of fights ({num_fights})")]
    BadClusterCount { k: usize, num_fights: usize },
    #[display("k-means fit failed: {message}")]
    KMeans { message: String },
    #[display("DBSCAN failed: {message}")]
    Dbscan { message: String },
}

/// Per-fight cluster assignment.
///
/// `None` marks a DBSCAN noise point; k-means assigns every fight a label.
#[derive(Debug, Clone)]
pub struct ClusterAssignment {
    pub labels: Vec<Option<usize>>,
    pub n_clusters: usize,
}

impl ClusterAssignment {
    fn from_dense_labels(labels: &Array1<usize>, n_clusters: usize) -> Self {
        Self {
            labels: labels.iter().map(|&label| Some(label)).collect(),
            n_clusters,
        }
    }

    fn from_memberships(memberships: &Array1<Option<usize>>) -> Self {
        let n_clusters = memberships
            .iter()
            .flatten()
            .max()
            .map_or(0, |max| max + 1);
        Self {
            labels: memberships.to_vec(),
            n_clusters,
        }
    }

    /// Number of fights assigned to no cluster.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_none()).count()
    }
}

/// Result of a k-means run.
#[derive(Debug, Clone)]
pub struct KmeansOutcome {
    pub assignment: ClusterAssignment,
    /// Cluster centers in (standardized) feature space, `k x num_metrics`
    pub centroids: Array2<f64>,
    /// Within-cluster sum of squares
    pub inertia: f64,
}

/// Run seeded k-means with `k` clusters over the records.
pub fn kmeans(records: &Array2<f64>, k: usize, seed: u64) -> Result<KmeansOutcome, ClusterError> {
    let num_fights = records.nrows();
    if num_fights == 0 {
        return Err(ClusterError::EmptyInput);
    }
    if k == 0 || k > num_fights {
        return Err(ClusterError::BadClusterCount { k, num_fights });
    }

    let rng = Xoshiro256Plus::seed_from_u64(seed);
    let dataset = DatasetBase::from(records.clone());
    let model = KMeans::params_with_rng(k, rng)
        .max_n_iterations(300)
        .tolerance(1e-4)
        .fit(&dataset)
        .map_err(|err| ClusterError::KMeans {
            message: err.to_string(),
        })?;

    let labels = model.predict(records);
    let centroids = model.centroids().clone();
    let inertia = within_cluster_sum_of_squares(records, &centroids, &labels);
    Ok(KmeansOutcome {
        assignment: ClusterAssignment::from_dense_labels(&labels, k),
        centroids,
        inertia,
    })
}

/// Run DBSCAN with the given neighborhood radius and core-point threshold.
pub fn dbscan(
    records: &Array2<f64>,
    epsilon: f64,
    min_points: usize,
) -> Result<ClusterAssignment, ClusterError> {
    if records.nrows() == 0 {
        return Err(ClusterError::EmptyInput);
    }

    let memberships = Dbscan::params(min_points)
        .tolerance(epsilon)
        .transform(records)
        .map_err(|err| ClusterError::Dbscan {
            message: err.to_string(),
        })?;
    Ok(ClusterAssignment::from_memberships(&memberships))
}

fn within_cluster_sum_of_squares(
    records: &Array2<f64>,
    centroids: &Array2<f64>,
    labels: &Array1<usize>,
) -> f64 {
    labels
        .iter()
        .enumerate()
        .map(|(row, &label)| {
            let point = records.row(row);
            let centroid = centroids.row(label);
            point
                .iter()
                .zip(centroid.iter())
                .map(|(p, c)| (p - c).powi(2))
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    // Three tight, well-separated blobs.
    fn blobs() -> Array2<f64> {
        array![
            [0.0, 0.0],
            [0.1, 0.2],
            [0.2, 0.1],
            [-0.1, 0.1],
            [5.0, 5.0],
            [5.1, 4.9],
            [4.9, 5.1],
            [5.2, 5.2],
            [10.0, 0.0],
            [10.1, 0.1],
            [9.9, -0.1],
            [10.2, 0.2],
        ]
    }

    #[test]
    fn test_kmeans_separates_blobs() {
        let records = blobs();
        let outcome = kmeans(&records, 3, 42).unwrap();
        assert_eq!(outcome.assignment.n_clusters, 3);
        assert_eq!(outcome.assignment.labels.len(), 12);
        assert_eq!(outcome.assignment.noise_count(), 0);

        // All four points of one blob share a label, and blobs differ.
        let labels = &outcome.assignment.labels;
        for blob in [&labels[0..4], &labels[4..8], &labels[8..12]] {
            assert!(blob.iter().all(|label| *label == blob[0]));
        }
        assert_ne!(labels[0], labels[4]);
        assert_ne!(labels[4], labels[8]);

        // Tight blobs keep the within-cluster spread small.
        assert!(outcome.inertia < 1.0, "inertia was {}", outcome.inertia);
    }

    #[test]
    fn test_kmeans_is_reproducible_for_a_seed() {
        let records = blobs();
        let first = kmeans(&records, 3, 7).unwrap();
        let second = kmeans(&records, 3, 7).unwrap();
        assert_eq!(first.assignment.labels, second.assignment.labels);
    }

    #[test]
    fn test_kmeans_rejects_bad_cluster_counts() {
        let records = blobs();
        assert!(matches!(
            kmeans(&records, 0, 42),
            Err(ClusterError::BadClusterCount { .. })
        ));
        assert!(matches!(
            kmeans(&records, 13, 42),
            Err(ClusterError::BadClusterCount { .. })
        ));
    }

    #[test]
    fn test_dbscan_finds_blobs_and_noise() {
        let mut records = blobs().into_raw_vec();
        records.extend_from_slice(&[50.0, 50.0]); // a lone outlier
        let records = Array2::from_shape_vec((13, 2), records).unwrap();

        let assignment = dbscan(&records, 1.0, 3).unwrap();
        assert_eq!(assignment.n_clusters, 3);
        assert_eq!(assignment.noise_count(), 1);
        assert_eq!(assignment.labels[12], None);
    }

    #[test]
    fn test_dbscan_all_noise_when_nothing_is_dense() {
        let records = array![[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let assignment = dbscan(&records, 0.5, 2).unwrap();
        assert_eq!(assignment.n_clusters, 0);
        assert_eq!(assignment.noise_count(), 3);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let records = Array2::<f64>::zeros((0, 2));
        assert!(matches!(
            kmeans(&records, 1, 0),
            Err(ClusterError::EmptyInput)
        ));
        assert!(matches!(
            dbscan(&records, 0.5, 2),
            Err(ClusterError::EmptyInput)
        ));
    }
}
