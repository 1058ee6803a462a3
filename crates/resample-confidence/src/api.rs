//! High-level API for bootstrap confidence intervals
//!
//! One-call wrappers around [`QuantileCi`] with the default
//! linear-interpolation estimator, for callers that do not need builder
//! configuration or seeding.

use crate::{bootstrap::QuantileCi, ConfidenceInterval};
use resample_core::Result;
use resample_quantile::LinearInterp;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 1000;

/// Reduced resample count for quick estimates
pub const FAST_RESAMPLES: usize = 200;

/// High-precision resample count for publication-quality intervals
pub const HIGH_PRECISION_RESAMPLES: usize = 10_000;

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Bootstrap confidence interval for the quantile at `probability`.
///
/// Uses the defaults: 95% confidence, [`DEFAULT_RESAMPLES`] resamples, and a
/// base seed drawn from process entropy.
///
/// # Example
///
/// ```
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// let ci = resample_confidence::api::quantile_ci(&data, 0.5).unwrap();
/// assert!(ci.lower <= ci.upper);
/// assert!(ci.lower >= 1.0 && ci.upper <= 10.0);
/// ```
pub fn quantile_ci(data: &[f64], probability: f64) -> Result<ConfidenceInterval> {
    QuantileCi::new(LinearInterp, probability).ci(data)
}

/// Bootstrap confidence interval with explicit confidence level and
/// resample count.
pub fn quantile_ci_with(
    data: &[f64],
    probability: f64,
    confidence_level: f64,
    n_resamples: usize,
) -> Result<ConfidenceInterval> {
    QuantileCi::new(LinearInterp, probability)
        .with_confidence_level(confidence_level)
        .with_resamples(n_resamples)
        .ci(data)
}

/// Bootstrap confidence interval for the median
pub fn median_ci(data: &[f64]) -> Result<ConfidenceInterval> {
    QuantileCi::median(LinearInterp).ci(data)
}
