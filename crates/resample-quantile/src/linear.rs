//! Linear interpolation between order statistics (R type 7)

use crate::error::{Error, Result};
use crate::traits::QuantileEstimator;

/// Quantile estimator using linear interpolation between order statistics.
///
/// The estimate at probability `p` sits at the fractional rank `p·(n−1)`
/// (0-indexed) of the sorted sample; a non-integral rank interpolates
/// linearly between the two bracketing order statistics. `p = 0` yields the
/// minimum, `p = 1` the maximum, and a single-element sample yields that
/// element for every `p`.
///
/// This is the Hyndman-Fan type 7 convention, the default in both R and
/// NumPy. Other conventions (nearest rank, midpoint variants) produce
/// different values on small samples and are not drop-in replacements.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterp;

impl LinearInterp {
    /// Create a new linear-interpolation estimator
    pub fn new() -> Self {
        Self
    }
}

/// Interpolated value at fractional rank `p * (n - 1)` of a sorted slice.
fn interpolate_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let frac = rank - rank.floor();
    if lo + 1 >= n {
        // p == 1, or close enough that the rank rounded to the top
        return sorted[n - 1];
    }
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

impl QuantileEstimator for LinearInterp {
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Error::check_non_empty(data)?;
        Error::check_finite(data)?;
        let mut sorted = data.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        Ok(interpolate_sorted(&sorted, p))
    }

    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Error::check_non_empty(sorted)?;
        Ok(interpolate_sorted(sorted, p))
    }
}
