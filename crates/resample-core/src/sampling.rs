//! With-replacement draws for bootstrap resampling

use rand::Rng;

/// Draw `data.len()` elements from `data` uniformly at random with
/// replacement.
///
/// Duplicates are expected and required; each draw is independent of the
/// others. The caller must guarantee `data` is non-empty.
pub fn resample<R: Rng>(rng: &mut R, data: &[f64]) -> Vec<f64> {
    debug_assert!(!data.is_empty());
    let n = data.len();
    (0..n).map(|_| data[rng.gen_range(0..n)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::trial_rng;
    use proptest::prelude::*;

    #[test]
    fn test_resample_preserves_length() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let mut rng = trial_rng(1, 0);
        assert_eq!(resample(&mut rng, &data).len(), data.len());
    }

    #[test]
    fn test_resample_draws_only_from_data() {
        let data = vec![10.0, 20.0, 30.0];
        let mut rng = trial_rng(2, 0);
        for _ in 0..100 {
            for v in resample(&mut rng, &data) {
                assert!(data.contains(&v));
            }
        }
    }

    #[test]
    fn test_resample_is_reproducible() {
        let data: Vec<f64> = (0..50).map(f64::from).collect();
        let a = resample(&mut trial_rng(42, 7), &data);
        let b = resample(&mut trial_rng(42, 7), &data);
        assert_eq!(a, b);
    }

    #[test]
    fn test_resample_produces_duplicates() {
        // 100 with-replacement draws from 100 distinct values collide with
        // overwhelming probability; a duplicate-free result would indicate
        // sampling without replacement.
        let data: Vec<f64> = (0..100).map(f64::from).collect();
        let mut drawn = resample(&mut trial_rng(3, 0), &data);
        drawn.sort_unstable_by(f64::total_cmp);
        let has_duplicate = drawn.windows(2).any(|w| w[0] == w[1]);
        assert!(has_duplicate);
    }

    #[test]
    fn test_single_element_resample() {
        let data = vec![7.5];
        let mut rng = trial_rng(4, 0);
        assert_eq!(resample(&mut rng, &data), vec![7.5]);
    }

    proptest! {
        #[test]
        fn prop_resample_stays_within_input(
            data in prop::collection::vec(-1e6..1e6f64, 1..64),
            base in any::<u64>(),
        ) {
            let mut rng = trial_rng(base, 0);
            let drawn = resample(&mut rng, &data);
            prop_assert_eq!(drawn.len(), data.len());
            for v in drawn {
                prop_assert!(data.contains(&v));
            }
        }
    }
}
