//! Quantile estimation for resampling procedures
//!
//! This crate provides the order-statistic primitive both resampling engines
//! call on every trial: the quantile of a finite sample, computed by linear
//! interpolation between the two bracketing order statistics (the convention
//! R calls type 7 and NumPy calls "linear").
//!
//! Estimation lives behind the [`QuantileEstimator`] trait so engines can be
//! generic over the interpolation convention; [`LinearInterp`] is the one
//! production implementation.
//!
//! # Examples
//!
//! ```
//! use resample_quantile::{LinearInterp, QuantileEstimator};
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let est = LinearInterp;
//!
//! assert_eq!(est.quantile(&data, 0.5).unwrap(), 5.5);
//! assert_eq!(est.quantile(&data, 0.0).unwrap(), 1.0);
//! assert_eq!(est.quantile(&data, 1.0).unwrap(), 10.0);
//! ```

mod error;
mod linear;
mod traits;

pub use error::{Error, Result};
pub use linear::LinearInterp;
pub use traits::QuantileEstimator;
