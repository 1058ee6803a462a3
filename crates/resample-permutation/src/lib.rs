//! Permutation tests for quantile differences
//!
//! This crate tests whether a quantile differs between two labeled groups
//! without assuming any parametric family. The null distribution is
//! simulated by shuffling the group labels over the pooled values and
//! recomputing the quantile difference on each relabeling; the p-value is
//! the fraction of relabelings as or more extreme than the observed
//! difference, counting ties as extreme.
//!
//! # Examples
//!
//! ```
//! use resample_permutation::{Alternative, QuantilePermTest};
//! use resample_quantile::LinearInterp;
//!
//! // group 1 sits entirely above group 0
//! let values: Vec<f64> = (1..=10).map(f64::from).collect();
//! let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
//!
//! let result = QuantilePermTest::median(LinearInterp)
//!     .with_alternative(Alternative::Greater)
//!     .with_resamples(10_000)
//!     .with_seed(42)
//!     .test(&values, &labels)
//!     .unwrap();
//!
//! assert_eq!(result.observed, 5.0);
//! assert!(result.p_value < 0.05);
//! ```

pub mod api;
mod permutation;
mod types;

pub use api::{
    median_permtest, quantile_permtest, quantile_permtest_with, DEFAULT_RESAMPLES, FAST_RESAMPLES,
};
pub use permutation::QuantilePermTest;
pub use types::{Alternative, PermutationTest};
