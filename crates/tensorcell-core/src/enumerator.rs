//! The bijection between face indices and faces.
//!
//! [`FaceEnumerator`] numbers the `K`-faces of an `N`-dimensional grid with the
//! integers `0..size()`.
//!
//! # Layout
//!
//! The index space is split into one block per [`Combination`] of along axes,
//! in increasing combination rank (see [`BlockSizes`]). Inside a block, a face
//! is numbered by a mixed-radix value over its positions:
//!
//! - along positions come first and are the least significant digits, each
//!   with radix `d` (the extent of its axis);
//! - across positions follow, each with radix `d + 1`.
//!
//! For the edges of a 2×3 grid this gives:
//!
//! ```text
//! index  0..8   along {0}: along position in 0..2, across position in 0..=3
//! index  8..17  along {1}: along position in 0..3, across position in 0..=2
//! ```
//!
//! # Examples
//!
//! ```
//! use tensorcell_core::{FaceEnumerator, GridShape};
//!
//! let edges = FaceEnumerator::<2, 1>::new(GridShape::new([2, 3])?)?;
//!
//! let edge = edges.decode(8)?;
//! assert_eq!(edge.directions().along_axes(), &[1]);
//! assert_eq!(edge.along(), &[0]);
//! assert_eq!(edge.across(), &[0]);
//!
//! for (index, edge) in (0..).zip(&edges) {
//!     assert_eq!(edges.encode(&edge)?, index);
//! }
//! # Ok::<(), tensorcell_core::EnumerationError>(())
//! ```

use std::{iter::FusedIterator, ops::Range};

use tensorcell_combinations::{Combination, Combinations};

use crate::{BlockSizes, EnumerationError, Face, GridShape};

/// Numbers the `K`-faces of an `N`-dimensional grid.
///
/// The enumerator is immutable once built. All queries are pure, so a shared
/// reference can be used from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceEnumerator<const N: usize, const K: usize> {
    shape: GridShape<N>,
    blocks: BlockSizes,
}

impl<const N: usize, const K: usize> FaceEnumerator<N, K> {
    /// The number of grid axes.
    pub const ORDER: usize = N;

    /// The dimension of the enumerated faces.
    pub const CELL_DIMENSION: usize = K;

    /// Builds the enumerator for the `K`-faces of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::SizeOverflow`] if the number of faces does not
    /// fit in a `u64`.
    pub fn new(shape: GridShape<N>) -> Result<Self, EnumerationError> {
        let blocks = BlockSizes::new::<N, K>(&shape)?;
        Ok(Self { shape, blocks })
    }

    /// Returns the grid shape.
    #[must_use]
    #[inline]
    pub fn shape(&self) -> &GridShape<N> {
        &self.shape
    }

    /// Returns the block table.
    #[must_use]
    #[inline]
    pub fn block_sizes(&self) -> &BlockSizes {
        &self.blocks
    }

    /// Returns the number of blocks, `C(N, K)`.
    #[must_use]
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of faces.
    #[must_use]
    #[inline]
    pub fn size(&self) -> u64 {
        self.blocks.total()
    }

    /// Returns the number of faces whose directions have rank `block`.
    ///
    /// # Panics
    ///
    /// Panics if `block >= block_count()`.
    #[must_use]
    pub fn block_size(&self, block: usize) -> u64 {
        self.blocks.as_slice()[block]
    }

    /// Returns the index range of the faces whose directions have rank `block`.
    ///
    /// # Panics
    ///
    /// Panics if `block >= block_count()`.
    #[must_use]
    pub fn block_range(&self, block: usize) -> Range<u64> {
        self.blocks.range(block)
    }

    /// Returns the face at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::InvalidIndex`] if `index >= size()`.
    pub fn decode(&self, index: u64) -> Result<Face<N, K>, EnumerationError> {
        let block = self
            .blocks
            .find(index)
            .ok_or(EnumerationError::InvalidIndex {
                index,
                size: self.size(),
            })?;
        let directions = Combinations::<N, K>::from_rank(block).map_err(|_| {
            EnumerationError::InvalidCombinationRank {
                rank: block,
                count: self.block_count(),
            }
        })?;

        let mut remaining = index - self.blocks.offset(block);
        let mut positions = [0; N];
        for (position, radix) in positions.iter_mut().zip(self.radices(&directions)) {
            // radix <= u32::MAX + 1
            #[expect(clippy::cast_possible_truncation)]
            let digit = (remaining % radix) as u32;
            *position = digit;
            remaining /= radix;
        }
        debug_assert_eq!(remaining, 0);

        Ok(Face::from_positions(directions, positions))
    }

    /// Returns the index of `face`.
    ///
    /// The face is validated first, so a face built by hand cannot alias the
    /// index of another face.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::InvalidCombinationRank`] if the face's
    /// directions fall outside the block table, and
    /// [`EnumerationError::PositionOutOfRange`] if a position lies outside its
    /// axis range.
    pub fn encode(&self, face: &Face<N, K>) -> Result<u64, EnumerationError> {
        let rank = face.directions().rank();
        if rank >= self.block_count() {
            return Err(EnumerationError::InvalidCombinationRank {
                rank,
                count: self.block_count(),
            });
        }
        self.validate(face)?;

        let mut value = 0;
        let mut multiplier = 1;
        for (&position, radix) in face.positions().iter().zip(self.radices(face.directions())) {
            value += u64::from(position) * multiplier;
            multiplier *= radix;
        }
        Ok(self.blocks.offset(rank) + value)
    }

    /// Checks that every position of `face` lies within the grid.
    ///
    /// Along positions must be below the axis extent and across positions must
    /// not exceed it.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::PositionOutOfRange`] for the first position
    /// outside its range.
    pub fn validate(&self, face: &Face<N, K>) -> Result<(), EnumerationError> {
        let axes = face.directions().axes();
        for ((&axis, &position), bound) in axes
            .iter()
            .zip(face.positions())
            .zip(self.radices(face.directions()))
        {
            if u64::from(position) >= bound {
                return Err(EnumerationError::PositionOutOfRange {
                    axis,
                    position,
                    bound,
                });
            }
        }
        Ok(())
    }

    /// Returns an iterator over all faces in index order.
    #[must_use]
    pub fn iter(&self) -> Faces<'_, N, K> {
        Faces {
            enumerator: self,
            front: 0,
            back: self.size(),
        }
    }

    /// Radix of each position slot: `d` for along axes, `d + 1` for across axes.
    fn radices<'a>(
        &'a self,
        directions: &'a Combination<N, K>,
    ) -> impl Iterator<Item = u64> + 'a {
        directions.axes().iter().enumerate().map(move |(slot, &axis)| {
            let extent = u64::from(self.shape.extent(axis));
            if slot < K { extent } else { extent + 1 }
        })
    }
}

impl<'a, const N: usize, const K: usize> IntoIterator for &'a FaceEnumerator<N, K> {
    type Item = Face<N, K>;
    type IntoIter = Faces<'a, N, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all faces of a [`FaceEnumerator`] in index order.
///
/// Created by [`FaceEnumerator::iter`].
#[derive(Debug, Clone)]
pub struct Faces<'a, const N: usize, const K: usize> {
    enumerator: &'a FaceEnumerator<N, K>,
    front: u64,
    back: u64,
}

impl<const N: usize, const K: usize> Iterator for Faces<'_, N, K> {
    type Item = Face<N, K>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let face = self.enumerator.decode(self.front).ok()?;
        self.front += 1;
        Some(face)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.back - self.front).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<const N: usize, const K: usize> DoubleEndedIterator for Faces<'_, N, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let face = self.enumerator.decode(self.back - 1).ok()?;
        self.back -= 1;
        Some(face)
    }
}

impl<const N: usize, const K: usize> FusedIterator for Faces<'_, N, K> {}
impl<const N: usize, const K: usize> ExactSizeIterator for Faces<'_, N, K> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rayon::prelude::*;

    use super::*;

    fn enumerator<const N: usize, const K: usize>(extents: [u32; N]) -> FaceEnumerator<N, K> {
        FaceEnumerator::new(GridShape::new(extents).unwrap()).unwrap()
    }

    fn assert_bijection<const N: usize, const K: usize>(extents: [u32; N]) {
        let enumerator = enumerator::<N, K>(extents);
        let mut seen = HashSet::new();
        for index in 0..enumerator.size() {
            let face = enumerator.decode(index).unwrap();
            assert_eq!(enumerator.encode(&face).unwrap(), index, "{face}");
            assert_eq!(enumerator.decode(enumerator.encode(&face).unwrap()), Ok(face));
            assert!(seen.insert(face), "duplicate face {face}");
        }
        assert_eq!(
            enumerator.decode(enumerator.size()),
            Err(EnumerationError::InvalidIndex {
                index: enumerator.size(),
                size: enumerator.size()
            })
        );
    }

    #[test]
    fn test_rectangle_edges() {
        let edges = enumerator::<2, 1>([2, 3]);
        assert_eq!(edges.block_count(), 2);
        assert_eq!(edges.block_size(0), 8);
        assert_eq!(edges.block_size(1), 9);
        assert_eq!(edges.size(), 17);

        let cases = [
            (0, 0, [0], [0]),
            (7, 0, [1], [3]),
            (8, 1, [0], [0]),
            (16, 1, [2], [2]),
        ];
        for (index, axis, along, across) in cases {
            let face = edges.decode(index).unwrap();
            assert_eq!(face.directions().along_axes(), &[axis], "index {index}");
            assert_eq!(face.along(), &along, "index {index}");
            assert_eq!(face.across(), &across, "index {index}");
            assert_eq!(edges.encode(&face).unwrap(), index);
        }
    }

    #[test]
    fn test_along_digits_are_least_significant() {
        let edges = enumerator::<2, 1>([2, 3]);
        let face = edges.decode(1).unwrap();
        assert_eq!(face.along(), &[1]);
        assert_eq!(face.across(), &[0]);
        let face = edges.decode(2).unwrap();
        assert_eq!(face.along(), &[0]);
        assert_eq!(face.across(), &[1]);
    }

    #[test]
    fn test_segment_vertices() {
        let vertices = enumerator::<1, 0>([4]);
        assert_eq!(vertices.block_count(), 1);
        assert_eq!(vertices.size(), 5);
        let positions: Vec<_> = vertices.iter().map(|v| v.across()[0]).collect();
        assert_eq!(positions, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_associated_constants() {
        assert_eq!(FaceEnumerator::<3, 1>::ORDER, 3);
        assert_eq!(FaceEnumerator::<3, 1>::CELL_DIMENSION, 1);
    }

    #[test]
    fn test_face_counts_of_cube_grid() {
        // an n×n×n grid has (n+1)^3 vertices, 3n(n+1)^2 edges,
        // 3n^2(n+1) squares and n^3 cubes
        let n = 3_u64;
        assert_eq!(enumerator::<3, 0>([3; 3]).size(), (n + 1).pow(3));
        assert_eq!(enumerator::<3, 1>([3; 3]).size(), 3 * n * (n + 1).pow(2));
        assert_eq!(enumerator::<3, 2>([3; 3]).size(), 3 * n.pow(2) * (n + 1));
        assert_eq!(enumerator::<3, 3>([3; 3]).size(), n.pow(3));
    }

    #[test]
    fn test_bijection_on_small_grids() {
        assert_bijection::<1, 0>([3]);
        assert_bijection::<1, 1>([3]);
        assert_bijection::<2, 0>([2, 3]);
        assert_bijection::<2, 1>([2, 3]);
        assert_bijection::<2, 2>([2, 3]);
        assert_bijection::<3, 1>([1, 2, 3]);
        assert_bijection::<3, 2>([3, 1, 2]);
        assert_bijection::<4, 2>([2, 1, 3, 2]);
    }

    #[test]
    fn test_blocks_follow_rank_order() {
        let faces = enumerator::<4, 2>([2, 3, 1, 2]);
        for block in 0..faces.block_count() {
            let range = faces.block_range(block);
            assert_eq!(range.end - range.start, faces.block_size(block));
            for index in range {
                let face = faces.decode(index).unwrap();
                assert_eq!(face.directions().rank(), block);
            }
        }
    }

    #[test]
    fn test_positions_stay_in_range() {
        let faces = enumerator::<3, 1>([2, 3, 4]);
        let shape = *faces.shape();
        for face in &faces {
            let directions = face.directions();
            for (&axis, &position) in directions.along_axes().iter().zip(face.along()) {
                assert!(position < shape.extent(axis), "{face}");
            }
            for (&axis, &position) in directions.across_axes().iter().zip(face.across()) {
                assert!(position <= shape.extent(axis), "{face}");
            }
        }
    }

    #[test]
    fn test_encode_rejects_out_of_range_positions() {
        let edges = enumerator::<2, 1>([2, 3]);
        let directions = Combination::<2, 1>::new([0]).unwrap();

        let along = Face::new(directions, [2], &[0]).unwrap();
        assert_eq!(
            edges.encode(&along),
            Err(EnumerationError::PositionOutOfRange {
                axis: 0,
                position: 2,
                bound: 2
            })
        );

        let across = Face::new(directions, [1], &[4]).unwrap();
        assert_eq!(
            edges.validate(&across),
            Err(EnumerationError::PositionOutOfRange {
                axis: 1,
                position: 4,
                bound: 4
            })
        );

        // the largest across position is the upper boundary plane
        let boundary = Face::new(directions, [1], &[3]).unwrap();
        assert_eq!(edges.encode(&boundary), Ok(7));
    }

    #[test]
    fn test_encode_from_coordinates() {
        let squares = enumerator::<3, 2>([2, 2, 2]);
        let directions = Combination::<3, 2>::new([0, 2]).unwrap();
        let face = Face::from_coordinates(directions, [1, 2, 0]);
        let index = squares.encode(&face).unwrap();
        assert!(squares.block_range(1).contains(&index));
        assert_eq!(squares.decode(index).unwrap().coordinates(), [1, 2, 0]);
    }

    #[test]
    fn test_iterator_is_exact_and_double_ended() {
        let edges = enumerator::<2, 1>([2, 3]);
        let mut iter = edges.iter();
        assert_eq!(iter.len(), 17);
        assert_eq!(iter.next(), Some(edges.decode(0).unwrap()));
        assert_eq!(iter.next_back(), Some(edges.decode(16).unwrap()));
        assert_eq!(iter.len(), 15);
        let rest: Vec<_> = iter.by_ref().collect();
        assert_eq!(rest.len(), 15);
        assert_eq!(rest[0], edges.decode(1).unwrap());
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn test_display_of_decoded_face() {
        let edges = enumerator::<2, 1>([2, 3]);
        assert_eq!(edges.decode(7).unwrap().to_string(), "{0} (1,3)");
        assert_eq!(edges.decode(16).unwrap().to_string(), "{1} (2,2)");
    }

    #[test]
    fn test_concurrent_reads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FaceEnumerator<4, 2>>();

        let faces = enumerator::<4, 2>([5, 4, 3, 6]);
        let round_trips = (0..faces.size())
            .into_par_iter()
            .all(|index| {
                let face = faces.decode(index).unwrap();
                faces.encode(&face) == Ok(index)
            });
        assert!(round_trips);
    }

    proptest! {
        #[test]
        fn prop_decode_then_encode(
            extents in proptest::array::uniform4(1_u32..8),
            seed in any::<u64>(),
        ) {
            let faces = enumerator::<4, 2>(extents);
            let index = seed % faces.size();
            let face = faces.decode(index).unwrap();
            prop_assert_eq!(faces.encode(&face), Ok(index));
            prop_assert!(faces.block_range(face.directions().rank()).contains(&index));
        }

        #[test]
        fn prop_encode_then_decode(
            extents in proptest::array::uniform3(1_u32..1000),
            along in proptest::sample::subsequence(vec![0_usize, 1, 2], 1),
            coordinates in proptest::array::uniform3(0_u32..1000),
        ) {
            let shape = GridShape::new(extents).unwrap();
            let faces = FaceEnumerator::<3, 1>::new(shape).unwrap();
            let directions = Combination::<3, 1>::new([along[0]]).unwrap();
            let coordinates = std::array::from_fn(|axis| {
                let bound = if directions.is_along(axis) { extents[axis] } else { extents[axis] + 1 };
                coordinates[axis] % bound
            });
            let face = Face::from_coordinates(directions, coordinates);
            let index = faces.encode(&face).unwrap();
            prop_assert!(index < faces.size());
            prop_assert_eq!(faces.decode(index), Ok(face));
        }

        #[test]
        fn prop_size_is_sum_of_block_products(
            extents in proptest::array::uniform3(1_u32..50),
        ) {
            let faces = enumerator::<3, 2>(extents);
            let mut total = 0;
            for (block, directions) in Combinations::<3, 2>::iter().enumerate() {
                let along: u64 = directions.along_axes().iter().map(|&a| u64::from(extents[a])).product();
                let across: u64 = directions.across_axes().iter().map(|&a| u64::from(extents[a]) + 1).product();
                prop_assert_eq!(faces.block_size(block), along * across);
                total += along * across;
            }
            prop_assert_eq!(faces.size(), total);
        }
    }
}
