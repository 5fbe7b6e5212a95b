use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Yields at most `n` elements of a stream, then stops.
///
/// Mirrors [`iter::take`][crate::iter::take]: the upstream stream is never
/// polled past the n-th element, and `take(source, 0)` terminates without
/// polling upstream at all.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::take(stream::from_iter(1..), 3);
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(2));
///     assert_eq!(s.next().await, Some(3));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn take<S>(source: S, n: usize) -> Take<S>
where
    S: Stream,
{
    Take {
        stream: source,
        remaining: n,
    }
}

/// A stream of at most the first `n` elements of the underlying stream.
///
/// This `struct` is created by the [`take`] function. See its documentation
/// for more.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct Take<S> {
    #[pin]
    stream: S,
    remaining: usize,
}

impl<S: Stream> Stream for Take<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.remaining == 0 {
            return Poll::Ready(None);
        }
        match ready!(this.stream.poll_next(cx)) {
            Some(item) => {
                *this.remaining -= 1;
                Poll::Ready(Some(item))
            }
            None => {
                *this.remaining = 0;
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.stream.size_hint();
        let lower = lower.min(self.remaining);
        let upper = match upper {
            Some(n) => Some(n.min(self.remaining)),
            None => Some(self.remaining),
        };
        (lower, upper)
    }
}
