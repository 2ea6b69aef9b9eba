//! Column-wise standardization of the feature matrix
//!
//! Metrics live on very different scales (time steps vs. damage totals), so
//! the embedding and clustering commands standardize each column to zero mean
//! and unit variance first. The computation is delegated to
//! `linfa-preprocessing`'s linear scaler.

use linfa::{
    DatasetBase,
    traits::{Fit, Transformer},
};
use linfa_preprocessing::linear_scaling::LinearScaler;
use ndarray::Array2;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ScaleError {
    #[display("standardization failed: {message}")]
    Standardize { message: String },
}

/// Standardize every column of `records` to zero mean and unit variance.
pub fn standardize(records: &Array2<f64>) -> Result<Array2<f64>, ScaleError> {
    let dataset = DatasetBase::from(records.clone());
    let scaler = LinearScaler::standard()
        .fit(&dataset)
        .map_err(|err| ScaleError::Standardize {
            message: err.to_string(),
        })?;
    Ok(scaler.transform(dataset).records)
}
