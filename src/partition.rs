//! Fixed-size sequence grouping under a selectable rounding policy.
//!
//! Splits an ordered sequence into contiguous groups of a target size. When
//! the sequence length is not evenly divisible by the group size, the
//! [`PartitionMode`] decides what happens to the remainder: fail, drop it,
//! or keep it as a shorter trailing group.
//!
//! # Guarantees
//!
//! - Groups cover the input contiguously and in the original order.
//! - The input is never mutated or reordered.
//! - For evenly-divisible input, all modes produce identical output.

use crate::error::Error;

/// How a sequence whose length is not evenly divisible by the group size
/// is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionMode {
    /// Fail with [`Error::LengthMismatch`] instead of producing a partial
    /// result.
    Strict,
    /// Produce only full groups; trailing remainder elements are dropped.
    Exclusive,
    /// Keep every element; the last group may be shorter than the target
    /// size.
    Inclusive,
}

/// Splits `data` into groups of `group_size`, cloning the elements.
///
/// # Returns
/// - [`Error::InvalidArgument`] if `group_size` is zero.
/// - [`Error::LengthMismatch`] in [`PartitionMode::Strict`] when
///   `data.len()` is not divisible by `group_size`.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use primkit::partition::{partition, PartitionMode};
///
/// let data = [1, 2, 3, 4, 5];
/// assert_eq!(
///     partition(&data, 2, PartitionMode::Inclusive).unwrap(),
///     vec![vec![1, 2], vec![3, 4], vec![5]],
/// );
/// assert_eq!(
///     partition(&data, 2, PartitionMode::Exclusive).unwrap(),
///     vec![vec![1, 2], vec![3, 4]],
/// );
/// assert!(partition(&data, 2, PartitionMode::Strict).is_err());
/// ```
pub fn partition<T: Clone>(
    data: &[T],
    group_size: usize,
    mode: PartitionMode,
) -> Result<Vec<Vec<T>>, Error> {
    let groups = partition_borrowed(data, group_size, mode)?;
    Ok(groups.into_iter().map(<[T]>::to_vec).collect())
}

/// Splits `data` into groups of `group_size` as borrowed sub-slices.
///
/// Zero-copy variant of [`partition`]: each group is a view into the input,
/// so no elements are cloned.
///
/// # Returns
/// - [`Error::InvalidArgument`] if `group_size` is zero.
/// - [`Error::LengthMismatch`] in [`PartitionMode::Strict`] when
///   `data.len()` is not divisible by `group_size`.
///
/// # Examples
/// ```
/// use primkit::partition::{partition_borrowed, PartitionMode};
///
/// let data = [1, 2, 3, 4, 5, 6];
/// let groups = partition_borrowed(&data, 3, PartitionMode::Strict).unwrap();
/// assert_eq!(groups, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
/// ```
pub fn partition_borrowed<T>(
    data: &[T],
    group_size: usize,
    mode: PartitionMode,
) -> Result<Vec<&[T]>, Error> {
    let count = group_count(data.len(), group_size, mode)?;
    Ok((0..count)
        .map(|i| {
            let start = i * group_size;
            let end = (start + group_size).min(data.len());
            &data[start..end]
        })
        .collect())
}

/// Number of output groups for the given length, size, and mode.
fn group_count(len: usize, group_size: usize, mode: PartitionMode) -> Result<usize, Error> {
    if group_size == 0 {
        return Err(Error::invalid_argument(
            "group size must be a positive integer",
        ));
    }
    if len % group_size == 0 {
        return Ok(len / group_size);
    }
    match mode {
        PartitionMode::Strict => Err(Error::LengthMismatch { len, group_size }),
        PartitionMode::Exclusive => Ok(len / group_size),
        PartitionMode::Inclusive => Ok(len / group_size + 1),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- Inclusive mode loses nothing: concatenation equals input ---
        #[test]
        fn inclusive_concat_is_identity(
            data in proptest::collection::vec(any::<i32>(), 0..200),
            group_size in 1_usize..20,
        ) {
            let groups = partition(&data, group_size, PartitionMode::Inclusive).unwrap();
            let concat: Vec<i32> = groups.concat();
            prop_assert_eq!(concat, data);
        }

        // --- Exclusive mode yields the longest full-group prefix ---
        #[test]
        fn exclusive_concat_is_prefix(
            data in proptest::collection::vec(any::<i32>(), 0..200),
            group_size in 1_usize..20,
        ) {
            let groups = partition(&data, group_size, PartitionMode::Exclusive).unwrap();
            let kept = data.len() - data.len() % group_size;
            prop_assert!(groups.iter().all(|g| g.len() == group_size));
            prop_assert_eq!(groups.concat(), &data[..kept]);
        }

        // --- Divisible input: all three modes agree exactly ---
        #[test]
        fn divisible_modes_agree(
            groups_in in proptest::collection::vec(any::<i32>(), 0..40),
            group_size in 1_usize..10,
        ) {
            // Build an input whose length is an exact multiple of group_size.
            let data: Vec<i32> = groups_in
                .iter()
                .flat_map(|&x| std::iter::repeat(x).take(group_size))
                .collect();
            let strict = partition(&data, group_size, PartitionMode::Strict).unwrap();
            let exclusive = partition(&data, group_size, PartitionMode::Exclusive).unwrap();
            let inclusive = partition(&data, group_size, PartitionMode::Inclusive).unwrap();
            prop_assert_eq!(&strict, &exclusive);
            prop_assert_eq!(&strict, &inclusive);
            prop_assert_eq!(strict.len(), data.len() / group_size);
            prop_assert!(strict.iter().all(|g| g.len() == group_size));
        }

        // --- Borrowed and cloning variants always match ---
        #[test]
        fn borrowed_matches_owned(
            data in proptest::collection::vec(any::<i32>(), 0..200),
            group_size in 1_usize..20,
        ) {
            let owned = partition(&data, group_size, PartitionMode::Inclusive).unwrap();
            let borrowed = partition_borrowed(&data, group_size, PartitionMode::Inclusive).unwrap();
            prop_assert_eq!(owned.len(), borrowed.len());
            for (o, b) in owned.iter().zip(borrowed) {
                prop_assert_eq!(o.as_slice(), b);
            }
        }
    }
}
