//! 2-D embeddings of the feature matrix
//!
//! Two projections are supported, both delegated to the `linfa` toolkit:
//!
//! - **PCA** (`linfa-reduction`): linear projection onto the two components
//!   with the highest explained variance. The explained-variance ratio is
//!   surfaced so plots can carry it on the axis labels.
//! - **t-SNE** (`linfa-tsne`): Barnes-Hut t-SNE, for non-linear structure
//!   that PCA flattens. Perplexity, approximation threshold, and iteration
//!   count are caller-tunable; the perplexity constraint
//!   `samples - 1 >= 3 * perplexity` is checked up front.

use linfa::{
    DatasetBase,
    traits::{Fit, Predict, Transformer},
};
use linfa_reduction::Pca;
use linfa_tsne::TSneParams;
use ndarray::Array2;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum EmbedError {
    #[display("PCA failed: {message}")]
    Pca { message: String },
    #[display("t-SNE failed: {message}")]
    Tsne { message: String },
    #[display(
        "t-SNE perplexity {perplexity} needs at least {required} samples, corpus has {actual}"
    )]
    TooFewSamplesForPerplexity {
        perplexity: f64,
        required: usize,
        actual: usize,
    },
    #[display("PCA needs at least 3 fights for a 2-D projection, corpus has {actual}")]
    TooFewSamplesForPca { actual: usize },
}

/// A 2-D PCA embedding with the explained-variance ratio of both components.
#[derive(Debug, Clone)]
pub struct PcaEmbedding {
    /// Embedded coordinates, `num_fights x 2`
    pub coords: Array2<f64>,
    /// Fraction of total variance captured by each component
    pub explained_variance_ratio: Vec<f64>,
}

/// Fit a 2-component PCA and project the records onto it.
///
/// At least 3 samples are required; with fewer the covariance has rank below
/// 2 and no second component exists.
pub fn pca_2d(records: &Array2<f64>) -> Result<PcaEmbedding, EmbedError> {
    let actual = records.nrows();
    if actual < 3 {
        return Err(EmbedError::TooFewSamplesForPca { actual });
    }

    let dataset = DatasetBase::from(records.clone());
    let pca = Pca::params(2)
        .fit(&dataset)
        .map_err(|err| EmbedError::Pca {
            message: err.to_string(),
        })?;
    let explained_variance_ratio = pca.explained_variance_ratio().to_vec();
    let coords = pca.predict(records);
    Ok(PcaEmbedding {
        coords,
        explained_variance_ratio,
    })
}

/// Parameters for the Barnes-Hut t-SNE run.
#[derive(Debug, Clone, Copy)]
pub struct TsneSettings {
    /// Effective number of neighbors per point
    pub perplexity: f64,
    /// Barnes-Hut approximation threshold (0.0 is exact and slow)
    pub theta: f64,
    /// Gradient-descent iterations
    pub max_iter: usize,
}

impl Default for TsneSettings {
    fn default() -> Self {
        Self {
            perplexity: 30.0,
            theta: 0.5,
            max_iter: 1000,
        }
    }
}

/// Embed the records into 2-D with Barnes-Hut t-SNE.
#[expect(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn tsne_2d(records: &Array2<f64>, settings: &TsneSettings) -> Result<Array2<f64>, EmbedError> {
    let actual = records.nrows();
    if (actual as f64 - 1.0) < 3.0 * settings.perplexity {
        return Err(EmbedError::TooFewSamplesForPerplexity {
            perplexity: settings.perplexity,
            required: (3.0 * settings.perplexity).ceil() as usize + 1,
            actual,
        });
    }

    TSneParams::embedding_size(2)
        .perplexity(settings.perplexity)
        .approx_threshold(settings.theta)
        .max_iter(settings.max_iter)
        .transform(records.clone())
        .map_err(|err| EmbedError::Tsne {
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;

    use super::*;

    #[test]
    fn test_pca_embeds_to_two_dimensions() {
        // Points along a noisy line in 4-D; PC1 should dominate.
        let records = Array2::from_shape_fn((20, 4), |(i, j)| {
            let t = i as f64;
            match j {
                0 => t,
                1 => 2.0 * t + 0.1,
                2 => -t,
                _ => 0.5 * t,
            }
        });

        let embedding = pca_2d(&records).unwrap();
        assert_eq!(embedding.coords.dim(), (20, 2));
        assert_eq!(embedding.explained_variance_ratio.len(), 2);
        assert!(embedding.explained_variance_ratio[0] > 0.9);
        let total: f64 = embedding.explained_variance_ratio.iter().sum();
        assert!(total <= 1.0 + 1e-9);
    }

    #[test]
    fn test_pca_rejects_corpora_smaller_than_three_fights() {
        // Two fights give a rank-1 covariance, so a second component never
        // exists and downstream ratio[1] lookups would be out of bounds.
        let records = Array2::from_shape_fn((2, 7), |(i, j)| (i + j) as f64);
        let err = pca_2d(&records).unwrap_err();
        assert!(matches!(err, EmbedError::TooFewSamplesForPca { actual: 2 }));
    }

    #[test]
    fn test_tsne_rejects_oversized_perplexity() {
        let records = Array2::zeros((10, 3));
        let settings = TsneSettings {
            perplexity: 30.0,
            ..TsneSettings::default()
        };
        let err = tsne_2d(&records, &settings).unwrap_err();
        assert!(matches!(
            err,
            EmbedError::TooFewSamplesForPerplexity { actual: 10, .. }
        ));
    }
}
