/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use fightlog_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(6.0));
/// assert_eq!(percentiles.get(25.0), Some(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// Percentile-value pairs, sorted by percentile.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// This method will sort the values internally before computing percentiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use fightlog_stats::percentiles::Percentiles;
    ///
    /// let values = vec![5.0, 2.0, 8.0, 1.0, 9.0];
    /// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(5.0));
    /// ```
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fightlog_stats::percentiles::Percentiles;
    ///
    /// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    /// let percentiles = Percentiles::new(&values, &[50.0, 95.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(3.0));
    /// assert_eq!(percentiles.get(95.0), Some(5.0));
    /// assert_eq!(percentiles.get(25.0), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

}

/// Computes a single percentile value from sorted data.
///
/// This function uses the nearest-rank method (also called "ordinary" percentile).
/// For a dataset with n values, the k-th percentile is the value at position
/// `floor(n * k / 100)`.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use fightlog_stats::percentiles::compute_percentile;
///
/// let mut values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// values.sort_by(f64::total_cmp);
///
/// let median = compute_percentile(&values, 50.0);
/// assert_eq!(median, 3.0);
/// ```
#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let idx = ((sorted_values.len() as f64 * percentile) / 100.0) as usize;
    let idx = idx.min(sorted_values.len() - 1);
    sorted_values[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_covers_every_precomputed_point() {
        let points = [5.0, 25.0, 50.0, 75.0, 95.0];
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let percentiles = Percentiles::new(&values, &points);
        for p in points {
            assert!(percentiles.get(p).is_some(), "missing percentile {p}");
        }
    }

    #[test]
    fn test_empty_input_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_extreme_percentiles() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_percentile(&values, 0.0), 1.0);
        assert_eq!(compute_percentile(&values, 100.0), 5.0);
    }
}
