//! Permutation test for a quantile difference between two groups
//!
//! The null distribution is simulated by shuffling the existing label vector
//! with Fisher-Yates, so group sizes are preserved exactly on every trial.
//! Per-element coin flips would not preserve them and would simulate a
//! different null.

use crate::types::{Alternative, PermutationTest};
use rand::seq::SliceRandom;
use resample_core::{execution::run_trials, seed::resolve_base_seed, Error, Result};
use resample_quantile::QuantileEstimator;
use tracing::{debug, instrument};

/// Split values into (group 0, group 1) by their labels.
fn partition(values: &[f64], labels: &[u8]) -> (Vec<f64>, Vec<f64>) {
    let mut group0 = Vec::new();
    let mut group1 = Vec::new();
    for (&value, &label) in values.iter().zip(labels) {
        if label == 1 {
            group1.push(value);
        } else {
            group0.push(value);
        }
    }
    (group0, group1)
}

/// Permutation-test engine for the difference in a quantile between two
/// labeled groups
///
/// Configured with builder methods; validation happens in
/// [`test`](Self::test) before any trial runs.
#[derive(Debug, Clone)]
pub struct QuantilePermTest<E> {
    estimator: E,
    probability: f64,
    alternative: Alternative,
    n_resamples: usize,
    seed: Option<u64>,
}

impl<E> QuantilePermTest<E>
where
    E: QuantileEstimator + Send + Sync,
{
    /// Create a new engine comparing the quantile at `probability`
    pub fn new(estimator: E, probability: f64) -> Self {
        Self {
            estimator,
            probability,
            alternative: Alternative::default(),
            n_resamples: crate::api::DEFAULT_RESAMPLES,
            seed: None,
        }
    }

    /// Engine comparing medians
    pub fn median(estimator: E) -> Self {
        Self::new(estimator, 0.5)
    }

    /// Set the alternative hypothesis
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    /// Set the number of label permutations
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the test on `values` annotated by binary `labels`.
    ///
    /// The observed statistic is the group-1 quantile minus the group-0
    /// quantile. Each trial shuffles the label vector and recomputes the
    /// statistic on the relabeled groups; the p-value is the fraction of
    /// trials as or more extreme than the observed statistic, counting ties
    /// as extreme.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error before any trial runs if `values`
    /// and `labels` differ in length, `values` is empty or non-finite, a
    /// label is neither 0 nor 1, either group is empty, the probability is
    /// outside `[0, 1]`, or the resample count is zero.
    #[instrument(skip(self, values, labels), fields(n = values.len(), n_resamples = self.n_resamples))]
    pub fn test(&self, values: &[f64], labels: &[u8]) -> Result<PermutationTest> {
        if values.is_empty() {
            return Err(Error::empty_input());
        }
        if labels.len() != values.len() {
            return Err(Error::size_mismatch(
                values.len(),
                labels.len(),
                "label vector",
            ));
        }
        if values.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("values"));
        }
        if let Some(bad) = labels.iter().find(|&&l| l > 1) {
            return Err(Error::InvalidInput(format!(
                "Label {bad} is not a group indicator (expected 0 or 1)"
            )));
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(Error::invalid_quantile(self.probability));
        }
        if self.n_resamples < 1 {
            return Err(Error::invalid_resamples(self.n_resamples));
        }

        let n_group1 = labels.iter().filter(|&&l| l == 1).count();
        if n_group1 == 0 || n_group1 == labels.len() {
            return Err(Error::InvalidInput(
                "Both groups need at least one observation".to_string(),
            ));
        }

        let (group0, group1) = partition(values, labels);
        let observed = self.estimator.quantile(&group1, self.probability)?
            - self.estimator.quantile(&group0, self.probability)?;

        let base_seed = resolve_base_seed(self.seed);
        debug!(
            "Running {} label permutations with base seed {}",
            self.n_resamples, base_seed
        );

        let trial_diffs = run_trials(self.n_resamples, base_seed, |rng| {
            let mut shuffled = labels.to_vec();
            shuffled.shuffle(rng);
            let (mut g0, mut g1) = partition(values, &shuffled);
            g0.sort_unstable_by(f64::total_cmp);
            g1.sort_unstable_by(f64::total_cmp);
            let q1 = self.estimator.quantile_sorted(&g1, self.probability)?;
            let q0 = self.estimator.quantile_sorted(&g0, self.probability)?;
            Ok(q1 - q0)
        })?;

        let count = trial_diffs
            .iter()
            .filter(|&&d| self.alternative.is_as_extreme(d, observed))
            .count();
        let p_value = count as f64 / self.n_resamples as f64;

        Ok(PermutationTest {
            p_value,
            observed,
            n_resamples: self.n_resamples,
            alternative: self.alternative,
        })
    }
}
