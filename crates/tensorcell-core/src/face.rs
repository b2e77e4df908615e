//! Face descriptors.

use std::fmt::{self, Display};

use tensorcell_combinations::Combination;

use crate::EnumerationError;

/// A `K`-dimensional face of an `N`-dimensional grid.
///
/// A face is described by its [`Combination`] of along axes and one lattice
/// position per axis:
///
/// - on each along axis, the unit cell the face spans, in `0..d`;
/// - on each across axis, the lattice plane the face lies in, in `0..=d`.
///
/// Positions are kept in the order of [`Combination::axes`]: along positions
/// first, then across positions.
///
/// # Examples
///
/// ```
/// use tensorcell_core::{Combination, Face};
///
/// // The edge along axis 1 starting at lattice point (2, 0, 1)
/// let directions = Combination::<3, 1>::new([1])?;
/// let face = Face::new(directions, [0], &[2, 1])?;
/// assert_eq!(face.along(), &[0]);
/// assert_eq!(face.across(), &[2, 1]);
/// assert_eq!(face.coordinates(), [2, 0, 1]);
/// assert_eq!(face.to_string(), "{1} (2,0,1)");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face<const N: usize, const K: usize> {
    directions: Combination<N, K>,
    positions: [u32; N],
}

impl<const N: usize, const K: usize> Face<N, K> {
    /// The dimension of the face.
    pub const DIMENSION: usize = K;

    /// Creates a face from its along and across positions.
    ///
    /// The positions are not checked against any grid; use
    /// [`FaceEnumerator::validate`](crate::FaceEnumerator::validate) for that.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::AcrossLengthMismatch`] if `across` does not
    /// hold exactly `N - K` positions.
    pub fn new(
        directions: Combination<N, K>,
        along: [u32; K],
        across: &[u32],
    ) -> Result<Self, EnumerationError> {
        let expected = directions.across_axes().len();
        if across.len() != expected {
            return Err(EnumerationError::AcrossLengthMismatch {
                expected,
                actual: across.len(),
            });
        }
        let mut positions = [0; N];
        positions[..K].copy_from_slice(&along);
        positions[K..].copy_from_slice(across);
        Ok(Self {
            directions,
            positions,
        })
    }

    /// Creates a face from its directions and the lattice coordinates of its
    /// lowest corner, indexed by axis.
    #[must_use]
    pub fn from_coordinates(directions: Combination<N, K>, coordinates: [u32; N]) -> Self {
        let axes = *directions.axes();
        let positions = axes.map(|axis| coordinates[axis]);
        Self {
            directions,
            positions,
        }
    }

    pub(crate) fn from_positions(directions: Combination<N, K>, positions: [u32; N]) -> Self {
        Self {
            directions,
            positions,
        }
    }

    /// Returns the along axes of the face.
    #[must_use]
    #[inline]
    pub fn directions(&self) -> &Combination<N, K> {
        &self.directions
    }

    /// Returns the positions on the along axes, in along-axis order.
    #[must_use]
    #[inline]
    pub fn along(&self) -> &[u32] {
        &self.positions[..K]
    }

    /// Returns the positions on the across axes, in across-axis order.
    #[must_use]
    #[inline]
    pub fn across(&self) -> &[u32] {
        &self.positions[K..]
    }

    /// Returns all positions, along positions first, then across positions.
    #[must_use]
    #[inline]
    pub fn positions(&self) -> &[u32; N] {
        &self.positions
    }

    /// Returns the lattice coordinates of the face's lowest corner, indexed by axis.
    #[must_use]
    pub fn coordinates(&self) -> [u32; N] {
        let mut coordinates = [0; N];
        for (&axis, &position) in self.directions.axes().iter().zip(&self.positions) {
            coordinates[axis] = position;
        }
        coordinates
    }
}

impl<const N: usize, const K: usize> Display for Face<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.directions)?;
        for (axis, coordinate) in self.coordinates().iter().enumerate() {
            if axis > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coordinate}")?;
        }
        f.write_str(")")
    }
}
