//! Alternative hypotheses and test results

use resample_core::Error;
use std::fmt;
use std::str::FromStr;

/// Direction of the alternative hypothesis.
///
/// The test statistic is the group-1 quantile minus the group-0 quantile;
/// the alternative selects which tail of the null distribution counts as
/// extreme. Counting is tie-inclusive: a trial exactly equal to the observed
/// statistic counts as extreme under either alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// Count trials less than or equal to the observed statistic
    #[default]
    Less,
    /// Count trials greater than or equal to the observed statistic
    Greater,
}

impl Alternative {
    /// Whether a trial statistic is as or more extreme than the observed one
    pub fn is_as_extreme(&self, trial: f64, observed: f64) -> bool {
        match self {
            Alternative::Less => trial <= observed,
            Alternative::Greater => trial >= observed,
        }
    }
}

impl FromStr for Alternative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "less" => Ok(Alternative::Less),
            "greater" => Ok(Alternative::Greater),
            _ => Err(Error::InvalidParameter(format!(
                "Unknown alternative '{s}', expected \"less\" or \"greater\""
            ))),
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::Less => write!(f, "less"),
            Alternative::Greater => write!(f, "greater"),
        }
    }
}

/// Outcome of a permutation test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermutationTest {
    /// Monte Carlo estimate of the permutation p-value.
    ///
    /// The estimate moves in steps of `1 / n_resamples`. A value of 0 means
    /// no trial reached the observed extremity, an artifact of the finite
    /// trial count rather than a true zero probability.
    pub p_value: f64,
    /// Observed statistic: group-1 quantile minus group-0 quantile
    pub observed: f64,
    /// Number of label permutations drawn
    pub n_resamples: usize,
    /// The alternative hypothesis that was tested
    pub alternative: Alternative,
}

impl PermutationTest {
    /// Whether the p-value falls at or below a significance level
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value <= alpha
    }
}

impl fmt::Display for PermutationTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p = {:.4} ({}, {} resamples, observed = {:.4})",
            self.p_value, self.alternative, self.n_resamples, self.observed
        )
    }
}
