//! Ordered maps based on self-balancing binary search trees.
//!
//! [`Map`] keeps its entries sorted by key over a single binary search tree
//! engine, with the balancing discipline chosen at compile time through the
//! [`Balance`] type parameter: [`Avl`] maintains height balance and
//! [`RedBlack`] maintains color balance. The [`AvlMap`] and [`RbMap`]
//! aliases pick a discipline; both expose the same interface and the same
//! O(log n) lookups, insertions, and removals.

pub mod balance;
pub mod map;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

#[cfg(feature = "serde")]
mod serde;

pub use crate::balance::{Avl, Balance, Color, RedBlack};
pub use crate::map::{AvlMap, Map, RbMap};
