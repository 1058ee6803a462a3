//! Resampling-based statistical inference
//!
//! Two nonparametric procedures built on one order-statistic primitive:
//!
//! - **Bootstrap confidence intervals** ([`confidence`]): resample a single
//!   sample with replacement and read a central interval for any quantile
//!   off the empirical distribution of resample quantiles.
//! - **Permutation tests** ([`permutation`]): shuffle group labels over
//!   pooled values to simulate the null distribution of a quantile
//!   difference between two groups.
//!
//! Both engines take an explicit quantile estimator ([`quantile`]), accept
//! an optional seed for reproducible runs, and execute trials sequentially
//! by default or on rayon with the `parallel` feature. A seeded run returns
//! identical results under either execution mode.
//!
//! # Examples
//!
//! ```
//! use resample_stats::prelude::*;
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//!
//! // 95% bootstrap CI for the median
//! let ci = QuantileCi::median(LinearInterp).with_seed(42).ci(&data)?;
//! assert!(ci.lower <= ci.upper);
//!
//! // does group 1 have a greater median than group 0?
//! let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
//! let test = QuantilePermTest::median(LinearInterp)
//!     .with_alternative(Alternative::Greater)
//!     .with_seed(42)
//!     .test(&data, &labels)?;
//! assert!(test.p_value < 0.05);
//! # Ok::<(), Error>(())
//! ```

pub use resample_confidence as confidence;
pub use resample_permutation as permutation;
pub use resample_quantile as quantile;

pub use resample_core::{Error, Result};

/// The common working set in one import
pub mod prelude {
    pub use resample_confidence::{
        median_ci, quantile_ci, quantile_ci_with, ConfidenceInterval, QuantileCi,
    };
    pub use resample_core::{Error, Result};
    pub use resample_permutation::{
        median_permtest, quantile_permtest, quantile_permtest_with, Alternative, PermutationTest,
        QuantilePermTest,
    };
    pub use resample_quantile::{LinearInterp, QuantileEstimator};
}
