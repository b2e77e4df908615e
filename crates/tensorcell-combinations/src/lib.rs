//! Lexicographic enumeration of axis combinations.
//!
//! A face of a tensor-product grid runs *along* some axes and sits *across* the
//! others. This crate enumerates every way of choosing the `K` along axes out of
//! `N` axes, in a fixed lexicographic order, and ranks a choice back to its
//! position in that order.
//!
//! # Overview
//!
//! - [`binomial`]: the number of combinations, usable in const contexts.
//! - [`Combination`]: one choice of along axes, with its complementary across
//!   axes.
//! - [`Combinations`]: ranking and unranking, plus iteration in rank order.
//!
//! # Examples
//!
//! ```
//! use tensorcell_combinations::{Combination, Combinations};
//!
//! // Choose 2 out of 3 axes
//! assert_eq!(Combinations::<3, 2>::COUNT, 3);
//!
//! let combination = Combinations::<3, 2>::from_rank(1)?;
//! assert_eq!(combination.along_axes(), &[0, 2]);
//! assert_eq!(combination.across_axes(), &[1]);
//!
//! // Ranking inverts the enumeration
//! assert_eq!(Combinations::to_rank(&combination), 1);
//! assert_eq!(Combination::<3, 2>::new([2, 0])?, combination);
//! # Ok::<(), tensorcell_combinations::CombinationError>(())
//! ```

pub mod binomial;
pub mod combination;

pub use self::{
    binomial::binomial,
    combination::{Combination, CombinationError, Combinations, Iter},
};
