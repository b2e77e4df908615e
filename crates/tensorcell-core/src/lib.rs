//! Addressing of the k-dimensional faces of a tensor-product grid.
//!
//! An `N`-dimensional grid with extents `d_0, ..., d_{N-1}` has many faces of
//! each dimension `K`: vertices for `K = 0`, edges for `K = 1`, and so on up to
//! the `N`-dimensional cells themselves. This crate numbers all `K`-faces with a
//! dense range of integers and converts between those integers and structured
//! face descriptors.
//!
//! # Overview
//!
//! - [`shape`]: [`GridShape`], the validated extents of the grid.
//! - [`block_sizes`]: [`BlockSizes`], the number of faces per along/across
//!   split of the axes.
//! - [`face`]: [`Face`], a face descriptor with its lattice coordinates.
//! - [`enumerator`]: [`FaceEnumerator`], the bijection itself.
//!
//! Faces are grouped into blocks, one per [`Combination`] of along axes, in
//! increasing combination rank. Within a block a face is numbered by a
//! mixed-radix value whose least significant digits are the along positions.
//!
//! # Examples
//!
//! ```
//! use tensorcell_core::{FaceEnumerator, GridShape};
//!
//! // Edges of a 2×3 grid
//! let edges = FaceEnumerator::<2, 1>::new(GridShape::new([2, 3])?)?;
//! assert_eq!(edges.size(), 17);
//!
//! let edge = edges.decode(7)?;
//! assert_eq!(edge.to_string(), "{0} (1,3)");
//! assert_eq!(edges.encode(&edge)?, 7);
//! # Ok::<(), tensorcell_core::EnumerationError>(())
//! ```

pub mod block_sizes;
pub mod enumerator;
pub mod error;
pub mod face;
pub mod shape;

pub use tensorcell_combinations::{Combination, Combinations};

pub use self::{
    block_sizes::BlockSizes,
    enumerator::{FaceEnumerator, Faces},
    error::EnumerationError,
    face::Face,
    shape::GridShape,
};
