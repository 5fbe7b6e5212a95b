//! The suspending combinator family.
//!
//! Each function in this module mirrors its counterpart in
//! [`iter`][crate::iter] with an identical contract (same element
//! ordering, same short-circuit points, same termination rules), except
//! that every step may suspend: the upstream source is a
//! [`Stream`][futures_core::Stream] whose pulls may resolve asynchronously,
//! and every caller-supplied step function returns a [`Future`][core::future::Future].
//!
//! Suspension happens at exactly two points: awaiting the next upstream
//! element, and awaiting an in-flight step future. Pulls are strictly
//! sequential: no adapter ever has two upstream requests or two step
//! futures in flight at once, so suspension can never reorder elements.
//!
//! [`from_iter`] promotes any sequential source into this family; it is the
//! only conversion direction, since converting a suspending source back
//! would require blocking.
//!
//! # Examples
//!
//! ```rust
//! use futures_lite::future::block_on;
//! use futures_lite::prelude::*;
//! use pullkit::stream;
//!
//! block_on(async {
//!     let mut s = stream::map(stream::from_iter([1, 2, 3]), |n| {
//!         std::future::ready(n * 10)
//!     });
//!     assert_eq!(s.next().await, Some(10));
//!     assert_eq!(s.next().await, Some(20));
//!     assert_eq!(s.next().await, Some(30));
//!     assert_eq!(s.next().await, None);
//! })
//! ```

pub(crate) mod concat;
pub(crate) mod dedupe;
pub(crate) mod filter;
pub(crate) mod filter_map;
pub(crate) mod flat_map;
pub(crate) mod flatten;
pub(crate) mod from_iter;
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
pub use from_iter::{from_iter, FromIter};
pub use map::{map, Map};
pub use reduce::{reduce, Reduce};
pub use scan::{scan, Scan};
pub use take::{take, Take};
pub use take_while::{take_while, TakeWhile};
