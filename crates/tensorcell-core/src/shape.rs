//! Grid extents.

use std::fmt::{self, Display};

use crate::EnumerationError;

/// The extents of an `N`-dimensional grid, one positive extent per axis.
///
/// An extent `d` means the axis has `d` unit cells and `d + 1` lattice planes.
///
/// # Examples
///
/// ```
/// use tensorcell_core::{EnumerationError, GridShape};
///
/// let shape = GridShape::new([2, 3])?;
/// assert_eq!(shape.extent(1), 3);
/// assert_eq!(shape.to_string(), "2x3");
///
/// assert_eq!(
///     GridShape::new([4, 0, 1]),
///     Err(EnumerationError::ZeroExtent { axis: 1 })
/// );
/// # Ok::<(), EnumerationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape<const N: usize> {
    extents: [u32; N],
}

impl<const N: usize> GridShape<N> {
    /// Creates a grid shape from its per-axis extents.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::ZeroExtent`] if any extent is zero.
    pub fn new(extents: [u32; N]) -> Result<Self, EnumerationError> {
        if let Some(axis) = extents.iter().position(|&extent| extent == 0) {
            return Err(EnumerationError::ZeroExtent { axis });
        }
        Ok(Self { extents })
    }

    /// Returns the extent of `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    #[must_use]
    #[inline]
    pub fn extent(&self, axis: usize) -> u32 {
        self.extents[axis]
    }

    /// Returns all extents in axis order.
    #[must_use]
    #[inline]
    pub fn extents(&self) -> &[u32; N] {
        &self.extents
    }
}

impl<const N: usize> TryFrom<[u32; N]> for GridShape<N> {
    type Error = EnumerationError;

    fn try_from(extents: [u32; N]) -> Result<Self, Self::Error> {
        Self::new(extents)
    }
}

impl<const N: usize> Display for GridShape<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (axis, extent) in self.extents.iter().enumerate() {
            if axis > 0 {
                f.write_str("x")?;
            }
            write!(f, "{extent}")?;
        }
        Ok(())
    }
}
