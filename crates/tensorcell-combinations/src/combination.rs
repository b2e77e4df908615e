//! Axis combinations and their lexicographic ranking.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::binomial;

/// Errors raised when building or looking up a [`Combination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CombinationError {
    /// The requested rank is not below the number of combinations.
    #[display("combination rank {rank} is out of range (count: {count})")]
    RankOutOfRange {
        /// The rejected rank.
        rank: usize,
        /// The number of combinations.
        count: usize,
    },
    /// An along axis does not exist in the grid.
    #[display("axis {axis} is out of range for {order} axes")]
    AxisOutOfRange {
        /// The rejected axis.
        axis: usize,
        /// The number of axes.
        order: usize,
    },
    /// The same axis was chosen more than once.
    #[display("axis {axis} is chosen more than once")]
    DuplicateAxis {
        /// The repeated axis.
        axis: usize,
    },
}

/// A choice of `K` along axes out of `N` axes.
///
/// The remaining `N - K` axes are the across axes. Both sets are kept in
/// increasing axis order, and the combination is stored as a single permutation
/// of `0..N`: the along axes first, then the across axes.
///
/// The derived ordering matches the rank order of [`Combinations`].
///
/// # Examples
///
/// ```
/// use tensorcell_combinations::Combination;
///
/// let combination = Combination::<4, 2>::new([3, 1])?;
/// assert_eq!(combination.along_axes(), &[1, 3]);
/// assert_eq!(combination.across_axes(), &[0, 2]);
/// assert_eq!(combination.along_axis(1), 3);
/// assert_eq!(combination.across_axis(0), 0);
/// assert_eq!(combination.to_string(), "{1, 3}");
/// # Ok::<(), tensorcell_combinations::CombinationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination<const N: usize, const K: usize> {
    axes: [usize; N],
}

impl<const N: usize, const K: usize> Combination<N, K> {
    /// Creates a combination from its along axes, given in any order.
    ///
    /// # Errors
    ///
    /// Returns [`CombinationError::AxisOutOfRange`] if an axis is not below `N`,
    /// and [`CombinationError::DuplicateAxis`] if an axis appears twice.
    pub fn new(mut along: [usize; K]) -> Result<Self, CombinationError> {
        along.sort_unstable();
        for (i, &axis) in along.iter().enumerate() {
            if axis >= N {
                return Err(CombinationError::AxisOutOfRange { axis, order: N });
            }
            if i > 0 && along[i - 1] == axis {
                return Err(CombinationError::DuplicateAxis { axis });
            }
        }
        Ok(Self::from_sorted_along(&along))
    }

    /// Builds the axis permutation from strictly increasing, in-range along axes.
    fn from_sorted_along(along: &[usize; K]) -> Self {
        const { assert!(K <= N, "cannot choose more axes than the grid has") };
        let mut axes = [0; N];
        axes[..K].copy_from_slice(along);
        let mut across = K;
        let mut next_along = 0;
        for axis in 0..N {
            if next_along < K && along[next_along] == axis {
                next_along += 1;
            } else {
                axes[across] = axis;
                across += 1;
            }
        }
        debug_assert_eq!(across, N);
        Self { axes }
    }

    /// Returns the `i`-th along axis.
    ///
    /// # Panics
    ///
    /// Panics if `i >= K`.
    #[must_use]
    #[inline]
    pub fn along_axis(&self, i: usize) -> usize {
        self.along_axes()[i]
    }

    /// Returns the `j`-th across axis.
    ///
    /// # Panics
    ///
    /// Panics if `j >= N - K`.
    #[must_use]
    #[inline]
    pub fn across_axis(&self, j: usize) -> usize {
        self.across_axes()[j]
    }

    /// Returns the along axes in increasing order.
    #[must_use]
    #[inline]
    pub fn along_axes(&self) -> &[usize] {
        &self.axes[..K]
    }

    /// Returns the across axes in increasing order.
    #[must_use]
    #[inline]
    pub fn across_axes(&self) -> &[usize] {
        &self.axes[K..]
    }

    /// Returns all axes, along axes first, then across axes.
    #[must_use]
    #[inline]
    pub fn axes(&self) -> &[usize; N] {
        &self.axes
    }

    /// Returns `true` if `axis` is one of the along axes.
    #[must_use]
    pub fn is_along(&self, axis: usize) -> bool {
        self.along_axes().binary_search(&axis).is_ok()
    }

    /// Returns the rank of this combination in lexicographic order.
    #[must_use]
    pub fn rank(&self) -> usize {
        Combinations::to_rank(self)
    }
}

impl<const N: usize, const K: usize> Display for Combination<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, axis) in self.along_axes().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{axis}")?;
        }
        f.write_str("}")
    }
}

/// The lexicographically ordered set of all `K`-axis combinations out of `N`.
///
/// Combinations are ordered by comparing their increasing along-axis sequences.
/// [`from_rank`](Self::from_rank) and [`to_rank`](Self::to_rank) are mutual
/// inverses over `0..COUNT`.
///
/// # Examples
///
/// ```
/// use tensorcell_combinations::Combinations;
///
/// let all: Vec<_> = Combinations::<3, 2>::iter()
///     .map(|c| c.along_axes().to_vec())
///     .collect();
/// assert_eq!(all, [[0, 1], [0, 2], [1, 2]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Combinations<const N: usize, const K: usize>;

impl<const N: usize, const K: usize> Combinations<N, K> {
    /// The number of combinations, `C(N, K)`.
    pub const COUNT: usize = binomial(N, K);

    /// Returns the combination at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinationError::RankOutOfRange`] if `rank >= COUNT`.
    pub fn from_rank(rank: usize) -> Result<Combination<N, K>, CombinationError> {
        if rank >= Self::COUNT {
            return Err(CombinationError::RankOutOfRange {
                rank,
                count: Self::COUNT,
            });
        }
        Ok(Self::unrank(rank))
    }

    /// Returns the rank of `combination`.
    #[must_use]
    pub fn to_rank(combination: &Combination<N, K>) -> usize {
        let mut rank = 0;
        let mut first = 0;
        for (i, &axis) in combination.along_axes().iter().enumerate() {
            // every combination that picks a smaller axis in slot i comes first
            for skipped in first..axis {
                rank += binomial(N - 1 - skipped, K - 1 - i);
            }
            first = axis + 1;
        }
        rank
    }

    /// Returns an iterator over all combinations in rank order.
    #[must_use]
    pub fn iter() -> Iter<N, K> {
        Iter {
            front: 0,
            back: Self::COUNT,
        }
    }

    fn unrank(rank: usize) -> Combination<N, K> {
        debug_assert!(rank < Self::COUNT);
        let mut remaining = rank;
        let mut along = [0; K];
        let mut first = 0;
        for (i, slot) in along.iter_mut().enumerate() {
            let mut axis = first;
            loop {
                let following = binomial(N - 1 - axis, K - 1 - i);
                if remaining < following {
                    break;
                }
                remaining -= following;
                axis += 1;
            }
            *slot = axis;
            first = axis + 1;
        }
        Combination::from_sorted_along(&along)
    }
}

/// Iterator over all combinations in rank order.
///
/// Created by [`Combinations::iter`].
#[derive(Debug, Clone)]
pub struct Iter<const N: usize, const K: usize> {
    front: usize,
    back: usize,
}

impl<const N: usize, const K: usize> Iterator for Iter<N, K> {
    type Item = Combination<N, K>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = Combinations::<N, K>::unrank(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<const N: usize, const K: usize> DoubleEndedIterator for Iter<N, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Combinations::<N, K>::unrank(self.back))
    }
}

impl<const N: usize, const K: usize> FusedIterator for Iter<N, K> {}
impl<const N: usize, const K: usize> ExactSizeIterator for Iter<N, K> {}
