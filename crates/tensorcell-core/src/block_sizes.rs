//! Per-combination face counts.
//!
//! The faces of a grid that share the same along axes form one block. A face
//! runs along an axis inside one of its `d` unit cells and sits across an axis
//! on one of its `d + 1` lattice planes, so the block for a combination holds
//!
//! ```text
//! (product of d over along axes) * (product of (d + 1) over across axes)
//! ```
//!
//! faces. [`BlockSizes`] stores these counts in combination rank order together
//! with their cumulative offsets.

use std::ops::Range;

use tensorcell_combinations::Combinations;

use crate::{EnumerationError, GridShape};

/// Face counts per combination, with cumulative offsets.
///
/// Block `b` covers the global indices `offset(b)..offset(b + 1)`. Blocks are
/// contiguous and cover `0..total()` in rank order.
///
/// # Examples
///
/// ```
/// use tensorcell_core::{BlockSizes, GridShape};
///
/// let shape = GridShape::new([2, 3])?;
/// let blocks = BlockSizes::new::<2, 1>(&shape)?;
/// assert_eq!(blocks.as_slice(), &[8, 9]);
/// assert_eq!(blocks.total(), 17);
/// assert_eq!(blocks.range(1), 8..17);
/// assert_eq!(blocks.find(8), Some(1));
/// # Ok::<(), tensorcell_core::EnumerationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSizes {
    sizes: Box<[u64]>,
    offsets: Box<[u64]>,
}

impl BlockSizes {
    /// Computes the block table for the `K`-faces of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::SizeOverflow`] if a block size or the total
    /// number of faces does not fit in a `u64`.
    pub fn new<const N: usize, const K: usize>(
        shape: &GridShape<N>,
    ) -> Result<Self, EnumerationError> {
        let count = Combinations::<N, K>::COUNT;
        let mut sizes = Vec::with_capacity(count);
        let mut offsets = Vec::with_capacity(count + 1);
        let mut total = 0_u64;
        offsets.push(total);

        for (rank, combination) in Combinations::<N, K>::iter().enumerate() {
            let along = combination
                .along_axes()
                .iter()
                .map(|&axis| u64::from(shape.extent(axis)));
            let across = combination
                .across_axes()
                .iter()
                .map(|&axis| u64::from(shape.extent(axis)) + 1);
            let size = along
                .chain(across)
                .try_fold(1_u64, u64::checked_mul)
                .ok_or(EnumerationError::SizeOverflow)?;
            total = total
                .checked_add(size)
                .ok_or(EnumerationError::SizeOverflow)?;
            log::trace!("block {rank} along {combination}: {size} faces");
            sizes.push(size);
            offsets.push(total);
        }

        log::debug!("{K}-faces of a {shape} grid: {count} blocks, {total} faces");
        Ok(Self {
            sizes: sizes.into_boxed_slice(),
            offsets: offsets.into_boxed_slice(),
        })
    }

    /// Returns the number of blocks.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if there are no blocks.
    ///
    /// This only happens for an impossible face dimension, so a table built by
    /// [`BlockSizes::new`] is never empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns the number of faces in `block`, or `None` if there is no such block.
    #[must_use]
    #[inline]
    pub fn get(&self, block: usize) -> Option<u64> {
        self.sizes.get(block).copied()
    }

    /// Returns the block sizes in rank order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns the total number of faces.
    #[must_use]
    #[inline]
    pub fn total(&self) -> u64 {
        self.offsets[self.sizes.len()]
    }

    /// Returns the first global index of `block`.
    ///
    /// `offset(len())` is the total number of faces.
    ///
    /// # Panics
    ///
    /// Panics if `block > len()`.
    #[must_use]
    #[inline]
    pub fn offset(&self, block: usize) -> u64 {
        self.offsets[block]
    }

    /// Returns the global index range covered by `block`.
    ///
    /// # Panics
    ///
    /// Panics if `block >= len()`.
    #[must_use]
    pub fn range(&self, block: usize) -> Range<u64> {
        assert!(
            block < self.len(),
            "block {block} is out of range (count: {})",
            self.len()
        );
        self.offsets[block]..self.offsets[block + 1]
    }

    /// Returns the block containing the global `index`, or `None` if
    /// `index >= total()`.
    #[must_use]
    pub fn find(&self, index: u64) -> Option<usize> {
        if index >= self.total() {
            return None;
        }
        // offsets[0] == 0 <= index, so the partition point is at least 1
        Some(self.offsets.partition_point(|&offset| offset <= index) - 1)
    }
}
