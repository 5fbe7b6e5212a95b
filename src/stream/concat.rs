use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

use crate::utils;

/// Exhausts each stream fully, in argument order, before moving to the
/// next.
///
/// Mirrors [`iter::concat`][crate::iter::concat]: equivalent to
/// [`flatten`][crate::stream::flatten] over a fixed list of streams.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::concat(vec![
///         stream::from_iter(vec![1]),
///         stream::from_iter(vec![2, 3]),
///     ]);
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(2));
///     assert_eq!(s.next().await, Some(3));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn concat<S>(sources: Vec<S>) -> Concat<S>
where
    S: Stream,
{
    Concat {
        len: sources.len(),
        streams: sources,
        index: 0,
        done: false,
    }
}

/// A stream that chains multiple streams one after another.
///
/// This `struct` is created by the [`concat`] function. See its
/// documentation for more.
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct Concat<S> {
    #[pin]
    streams: Vec<S>,
    index: usize,
    len: usize,
    done: bool,
}

impl<S: Stream> Stream for Concat<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            if this.index == this.len {
                *this.done = true;
                return Poll::Ready(None);
            }
            let stream = match utils::get_pin_mut_vec(this.streams.as_mut(), *this.index) {
                Some(stream) => stream,
                None => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
            };
            match stream.poll_next(cx) {
                Poll::Ready(Some(item)) => return Poll::Ready(Some(item)),
                Poll::Ready(None) => {
                    *this.index += 1;
                    continue;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S> fmt::Debug for Concat<S>
where
    S: Stream + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.streams.iter()).finish()
    }
}
