//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute quantile of empty data")]
    EmptyData,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Data contains NaN or infinite values
    #[error("Data contains NaN or infinite values")]
    NonFiniteData,

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] resample_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty(data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(())
    }

    /// Check that all values are finite
    pub fn check_finite(data: &[f64]) -> Result<()> {
        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::NonFiniteData);
        }
        Ok(())
    }
}

// Engines report through the core error type.
impl From<Error> for resample_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::EmptyData => resample_core::Error::empty_input(),
            Error::InvalidProbability { p } => resample_core::Error::invalid_quantile(p),
            Error::NonFiniteData => resample_core::Error::non_finite("data"),
            Error::Core(e) => e,
        }
    }
}
