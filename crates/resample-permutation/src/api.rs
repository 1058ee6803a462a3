//! High-level API for permutation tests
//!
//! One-call wrappers around [`QuantilePermTest`] with the default
//! linear-interpolation estimator.

use crate::permutation::QuantilePermTest;
use crate::types::{Alternative, PermutationTest};
use resample_core::Result;
use resample_quantile::LinearInterp;

/// Default number of label permutations
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Reduced permutation count for quick estimates
pub const FAST_RESAMPLES: usize = 1000;

/// Permutation test for the quantile at `probability`, with the defaults:
/// alternative [`Alternative::Less`], [`DEFAULT_RESAMPLES`] permutations,
/// and a base seed drawn from process entropy.
///
/// # Example
///
/// ```
/// let values = vec![1.0, 2.0, 3.0, 4.0];
/// let labels = vec![0, 0, 1, 1];
/// let result = resample_permutation::api::quantile_permtest(&values, &labels, 0.5).unwrap();
/// assert_eq!(result.observed, 2.0);
/// assert!((0.0..=1.0).contains(&result.p_value));
/// ```
pub fn quantile_permtest(values: &[f64], labels: &[u8], probability: f64) -> Result<PermutationTest> {
    QuantilePermTest::new(LinearInterp, probability).test(values, labels)
}

/// Permutation test with explicit alternative and permutation count.
pub fn quantile_permtest_with(
    values: &[f64],
    labels: &[u8],
    probability: f64,
    alternative: Alternative,
    n_resamples: usize,
) -> Result<PermutationTest> {
    QuantilePermTest::new(LinearInterp, probability)
        .with_alternative(alternative)
        .with_resamples(n_resamples)
        .test(values, labels)
}

/// Permutation test comparing group medians
pub fn median_permtest(values: &[f64], labels: &[u8]) -> Result<PermutationTest> {
    QuantilePermTest::median(LinearInterp).test(values, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let values = vec![1.0, 5.0, 2.0, 6.0, 3.0, 7.0];
        let labels = vec![0, 1, 0, 1, 0, 1];
        let result = quantile_permtest(&values, &labels, 0.5).unwrap();
        assert_eq!(result.alternative, Alternative::Less);
        assert_eq!(result.n_resamples, DEFAULT_RESAMPLES);
    }

    #[test]
    fn test_explicit_parameters() {
        let values = vec![1.0, 5.0, 2.0, 6.0, 3.0, 7.0];
        let labels = vec![0, 1, 0, 1, 0, 1];
        let result =
            quantile_permtest_with(&values, &labels, 0.5, Alternative::Greater, FAST_RESAMPLES)
                .unwrap();
        assert_eq!(result.alternative, Alternative::Greater);
        assert_eq!(result.n_resamples, FAST_RESAMPLES);
    }

    #[test]
    fn test_median_convenience() {
        let values = vec![1.0, 2.0, 9.0, 10.0];
        let labels = vec![0, 0, 1, 1];
        let result = median_permtest(&values, &labels).unwrap();
        assert_eq!(result.observed, 8.0);
    }

    #[test]
    fn test_empty_input_errors() {
        assert!(quantile_permtest(&[], &[], 0.5).is_err());
        assert!(median_permtest(&[], &[]).is_err());
    }
}
