//! Opt-in extension trait over slice-like containers.
//!
//! Importing [`SeqExt`] adds the sequence utilities as methods on every
//! type that can view itself as a slice — `Vec`, arrays, slices,
//! `Box<[T]>`. Which containers gain the adapter is decided here, at
//! compile time, by the blanket `AsRef<[T]>` implementation.

use std::hash::Hash;

use crate::error::Error;
use crate::partition::{partition, partition_borrowed, PartitionMode};
use crate::seq::{unique, unique_by};

/// Sequence utilities as methods on slice-like containers.
///
/// # Examples
/// ```
/// use primkit::ext::SeqExt;
/// use primkit::partition::PartitionMode;
///
/// let data = vec![1, 1, 2, 3, 3, 3];
/// assert_eq!(data.uniques(), vec![1, 2, 3]);
/// assert_eq!(
///     data.partitioned(2, PartitionMode::Strict).unwrap(),
///     vec![vec![1, 1], vec![2, 3], vec![3, 3]],
/// );
/// ```
pub trait SeqExt<T> {
    /// Views `self` as a slice.
    fn as_seq(&self) -> &[T];

    /// See [`partition`].
    fn partitioned(&self, group_size: usize, mode: PartitionMode) -> Result<Vec<Vec<T>>, Error>
    where
        T: Clone,
    {
        partition(self.as_seq(), group_size, mode)
    }

    /// See [`partition_borrowed`].
    fn partitioned_borrowed(
        &self,
        group_size: usize,
        mode: PartitionMode,
    ) -> Result<Vec<&[T]>, Error> {
        partition_borrowed(self.as_seq(), group_size, mode)
    }

    /// See [`unique`].
    fn uniques(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        unique(self.as_seq())
    }

    /// See [`unique_by`].
    fn uniques_by<F>(&self, eq: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        unique_by(self.as_seq(), eq)
    }
}

impl<S, T> SeqExt<T> for S
where
    S: AsRef<[T]> + ?Sized,
{
    fn as_seq(&self) -> &[T] {
        self.as_ref()
    }
}
