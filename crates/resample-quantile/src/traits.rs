//! Estimator traits

use crate::error::{Error, Result};

/// A quantile estimator over `f64` samples.
///
/// Implementations define how the quantile at probability `p` is read off
/// the order statistics of a sample. Both resampling engines are generic
/// over this trait and call it once or twice per trial.
pub trait QuantileEstimator {
    /// Estimate the quantile at probability `p ∈ [0, 1]`.
    ///
    /// Sorts a copy of `data`; the input is never mutated.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty, contains non-finite values, or
    /// `p` is outside `[0, 1]`.
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64>;

    /// Estimate the quantile of data already sorted in ascending order.
    ///
    /// The caller guarantees `sorted` is ascending and free of NaN; this is
    /// the per-trial fast path for buffers the engine sorted itself.
    ///
    /// # Errors
    ///
    /// Returns an error if `sorted` is empty or `p` is outside `[0, 1]`.
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64>;

    /// Estimate several quantiles of the same sample, sorting once.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`quantile`], applied
    /// to every probability in `ps`.
    ///
    /// [`quantile`]: QuantileEstimator::quantile
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        Error::check_non_empty(data)?;
        Error::check_finite(data)?;
        let mut sorted = data.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        ps.iter()
            .map(|&p| self.quantile_sorted(&sorted, p))
            .collect()
    }
}
