//! Bootstrap confidence intervals for quantiles
//!
//! This crate estimates a central confidence interval for an arbitrary
//! quantile of a single sample by percentile bootstrap: resample the data
//! with replacement, take the target quantile of every resample, and read
//! the interval off the tails of that trial distribution.
//!
//! The method assumes no parametric family. Its one systematic limitation
//! is documented on [`QuantileCi::ci`]: the interval is confined to the
//! observed range of the sample.
//!
//! # Examples
//!
//! ```
//! use resample_confidence::QuantileCi;
//! use resample_quantile::LinearInterp;
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//!
//! let ci = QuantileCi::median(LinearInterp)
//!     .with_resamples(1000)
//!     .with_seed(42)
//!     .ci(&data)
//!     .unwrap();
//!
//! assert!(ci.lower <= ci.upper);
//! assert_eq!(ci.estimate, 5.5);
//! ```

pub mod api;
mod bootstrap;
mod types;

pub use api::{
    median_ci, quantile_ci, quantile_ci_with, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES,
    FAST_RESAMPLES, HIGH_PRECISION_RESAMPLES,
};
pub use bootstrap::QuantileCi;
pub use types::ConfidenceInterval;
