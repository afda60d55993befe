//! Fallible conversion of an iterator into a fixed-size array.
//!
//! [`try_from_iter`] pulls up to `N` items from any [`IntoIterator`]. With
//! enough items it returns a `[T; N]`; otherwise the items it did get come
//! back as an [`IntoIter`], so nothing that was pulled is lost.
//!
//! ```
//! use array_try_from_iter::{try_from_iter, IteratorExt};
//!
//! let squares = (1..).map(|n| n * n);
//! assert_eq!(try_from_iter(squares).ok(), Some([1, 4, 9, 16]));
//!
//! match "x y".split(' ').try_collect_array::<3>() {
//!     Ok(_) => unreachable!(),
//!     Err(partial) => assert_eq!(partial.as_slice(), ["x", "y"]),
//! }
//! ```
//!
//! The storage underneath, [`ArrayBuilder`], is public for building arrays
//! one value at a time. Everything here works without `std` or an allocator.

#![no_std]

mod builder;
mod chunks;
mod iter;
mod try_from_iter;

pub use builder::ArrayBuilder;
pub use chunks::ArrayIterator;
pub use iter::IntoIter;
pub use try_from_iter::{try_from_iter, IteratorExt};
