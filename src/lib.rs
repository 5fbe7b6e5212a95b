//! Lazy sequence combinators over sync iterators and async streams.
//!
//! This library provides a small algebra of pull-based sequence adapters
//! (transform, filter, reduce, flatten, bound, dedupe) in two mirrored
//! families:
//!
//! - [`iter`]: the sequential family. Each combinator takes an
//!   [`IntoIterator`] and returns an adapter implementing [`Iterator`],
//!   producing elements strictly one at a time with no suspension.
//! - [`stream`]: the suspending family. Each combinator takes a
//!   [`Stream`][futures_core::Stream] and returns an adapter implementing
//!   `Stream`, where both the upstream pull and the caller-supplied step
//!   function may suspend before resolving.
//!
//! The two families share one contract: element order is preserved, nothing
//! is pulled ahead of what the consumer has requested, and at most one pull
//! is outstanding at any instant across an entire chain. The suspending
//! family adds suspension points without changing where a chain
//! short-circuits or terminates. [`stream::from_iter`] bridges the two,
//! promoting any sequential source into a suspending one; no conversion
//! exists in the other direction because it would require blocking.
//!
//! # Examples
//!
//! Sequential:
//! ```rust
//! use pullkit::iter;
//!
//! let doubled: Vec<_> = iter::map([1, 2, 3], |n| n * 2).collect();
//! assert_eq!(doubled, [2, 4, 6]);
//! ```
//!
//! Suspending, over a bridged sequential source:
//! ```rust
//! use futures_lite::future::block_on;
//! use pullkit::stream;
//!
//! block_on(async {
//!     let evens = stream::filter(stream::from_iter(1..=6), |n| {
//!         std::future::ready(n % 2 == 0)
//!     });
//!     let sum = stream::reduce(evens, 0, |acc, n| async move { acc + n }).await;
//!     assert_eq!(sum, 12);
//! })
//! ```
//!
//! # Termination
//!
//! Every adapter is fused: once it has reported the end of the sequence,
//! further pulls deterministically yield "done" again without touching the
//! upstream source. The one exception is [`stream::Reduce`], a terminal
//! future, which panics if polled after completion.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

pub mod iter;
pub mod stream;
