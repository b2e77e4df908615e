//! Error type for face enumeration.

/// Errors raised while building a [`FaceEnumerator`](crate::FaceEnumerator)
/// or converting between indices and faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EnumerationError {
    /// A grid extent is zero.
    #[display("extent of axis {axis} must be positive")]
    ZeroExtent {
        /// The axis with a zero extent.
        axis: usize,
    },
    /// The number of faces does not fit in a `u64`.
    #[display("number of faces overflows u64")]
    SizeOverflow,
    /// An index is not below the number of faces.
    #[display("face index {index} is out of range (size: {size})")]
    InvalidIndex {
        /// The rejected index.
        index: u64,
        /// The number of faces.
        size: u64,
    },
    /// A face names a combination outside the block table.
    #[display("combination rank {rank} is out of range (count: {count})")]
    InvalidCombinationRank {
        /// The rank of the face's combination.
        rank: usize,
        /// The number of blocks.
        count: usize,
    },
    /// A face position lies outside its axis range.
    #[display("position {position} on axis {axis} is out of range (bound: {bound})")]
    PositionOutOfRange {
        /// The axis of the offending position.
        axis: usize,
        /// The offending position.
        position: u32,
        /// The exclusive upper bound for positions on this axis.
        bound: u64,
    },
    /// A face was built with the wrong number of across positions.
    #[display("expected {expected} across positions, got {actual}")]
    AcrossLengthMismatch {
        /// The number of across axes.
        expected: usize,
        /// The number of positions supplied.
        actual: usize,
    },
}
