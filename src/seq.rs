//! Sequence deduplication and linear range generation.
//!
//! Order-preserving helpers over slices. Nothing here mutates its input;
//! every function returns a fresh `Vec`.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the unique elements of `data`, first occurrence winning.
///
/// The relative order of the survivors is the order in which they first
/// appear in the input.
///
/// # Complexity
/// Time: O(n) expected, Space: O(n)
///
/// # Examples
/// ```
/// use primkit::seq::unique;
/// assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique<T: Clone + Eq + Hash>(data: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(data.len());
    data.iter()
        .filter(|x| seen.insert((*x).clone()))
        .cloned()
        .collect()
}

/// Returns the unique elements of `data` under a caller-supplied equality
/// predicate, first occurrence winning.
///
/// Use this when the element type has no usable `Eq + Hash`, or when
/// uniqueness should be judged on a projection of the element (case
/// folding, a key field, a tolerance). The predicate receives two elements
/// and returns whether they count as identical.
///
/// # Complexity
/// Time: O(n²) — every candidate is compared against all survivors.
///
/// # Examples
/// ```
/// use primkit::seq::unique_by;
/// let words = ["Ada", "ada", "Grace", "ADA"];
/// let uniques = unique_by(&words, |a, b| a.eq_ignore_ascii_case(b));
/// assert_eq!(uniques, vec!["Ada", "Grace"]);
/// ```
pub fn unique_by<T, F>(data: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut uniques: Vec<T> = Vec::new();
    for current in data {
        if !uniques.iter().any(|kept| eq(kept, current)) {
            uniques.push(current.clone());
        }
    }
    uniques
}

/// Generates a linearly spaced sequence of `length` values.
///
/// The first element is `start` and each subsequent element increments by
/// `step`. Values are computed as `start + i * step` rather than by
/// repeated addition, so rounding error does not accumulate along the
/// sequence.
///
/// # Examples
/// ```
/// use primkit::seq::range;
/// assert_eq!(range(4, 0.0, 1.0), vec![0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(range(3, 1.0, -0.5), vec![1.0, 0.5, 0.0]);
/// assert!(range(0, 5.0, 1.0).is_empty());
/// ```
pub fn range(length: usize, start: f64, step: f64) -> Vec<f64> {
    (0..length).map(|i| start + i as f64 * step).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- unique is idempotent ---
        #[test]
        fn unique_idempotent(data in proptest::collection::vec(any::<i16>(), 0..100)) {
            let once = unique(&data);
            let twice = unique(&once);
            prop_assert_eq!(once, twice);
        }

        // --- unique output is a subsequence of the input ---
        #[test]
        fn unique_is_subsequence(data in proptest::collection::vec(any::<i16>(), 0..100)) {
            let uniques = unique(&data);
            let mut input = data.iter();
            for u in &uniques {
                prop_assert!(input.any(|x| x == u), "not a subsequence");
            }
        }

        // --- unique_by with plain equality matches unique ---
        #[test]
        fn unique_by_matches_unique(data in proptest::collection::vec(any::<i16>(), 0..60)) {
            prop_assert_eq!(unique_by(&data, |a, b| a == b), unique(&data));
        }

        // --- range has the requested length and spacing ---
        #[test]
        fn range_length_and_spacing(
            length in 0_usize..100,
            start in -1e6_f64..1e6,
            step in -1e3_f64..1e3,
        ) {
            let values = range(length, start, step);
            prop_assert_eq!(values.len(), length);
            for (i, v) in values.iter().enumerate() {
                let expected = start + i as f64 * step;
                prop_assert!((v - expected).abs() <= 1e-9 * expected.abs().max(1.0));
            }
        }
    }
}
