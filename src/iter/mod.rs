//! The sequential combinator family.
//!
//! Each function in this module takes a pull-based source, anything
//! implementing [`IntoIterator`], and returns a lazy adapter implementing
//! [`Iterator`]. Nothing is pulled from the source until the consumer asks
//! for the next element, and no adapter pulls further ahead than the
//! consumer has requested. [`reduce`] is the single exception: it is a
//! terminal consumer that drains its source eagerly.
//!
//! # Examples
//!
//! ```rust
//! use pullkit::iter;
//!
//! let out: Vec<_> = iter::take(iter::filter(1.., |n| n % 3 == 0), 4).collect();
//! assert_eq!(out, [3, 6, 9, 12]);
//! ```

pub(crate) mod concat;
pub(crate) mod dedupe;
pub(crate) mod filter;
pub(crate) mod filter_map;
pub(crate) mod flat_map;
pub(crate) mod flatten;
pub(crate) mod map;
pub(crate) mod reduce;
pub(crate) mod scan;
pub(crate) mod take;
pub(crate) mod take_while;

pub use concat::{concat, Concat};
pub use dedupe::{dedupe, Dedupe};
pub use filter::{filter, Filter};
pub use filter_map::{filter_map, FilterMap};
pub use flat_map::{flat_map, FlatMap};
pub use flatten::{flatten, Flatten};
pub use map::{map, Map};
pub use reduce::reduce;
pub use scan::{scan, Scan};
pub use take::{take, Take};
pub use take_while::{take_while, TakeWhile};
