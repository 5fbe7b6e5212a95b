use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Yields elements while a suspending predicate holds, then stops
/// permanently.
///
/// Mirrors [`iter::take_while`][crate::iter::take_while]: the first
/// rejected element is discarded: it is not yielded, and the upstream
/// stream is never polled again, even if later elements would have
/// satisfied the predicate.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::take_while(stream::from_iter([1, 2, 3, 4, 1]), |n| {
///         std::future::ready(*n < 3)
///     });
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(2));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn take_while<S, P, Fut>(source: S, predicate: P) -> TakeWhile<S, P, Fut>
where
    S: Stream,
    P: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    TakeWhile {
        stream: source,
        predicate,
        future: None,
        pending: None,
        done: false,
    }
}

/// A stream of the leading elements satisfying a suspending predicate.
///
/// This `struct` is created by the [`take_while`] function. See its
/// documentation for more.
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct TakeWhile<S: Stream, P, Fut> {
    #[pin]
    stream: S,
    predicate: P,
    #[pin]
    future: Option<Fut>,
    pending: Option<S::Item>,
    done: bool,
}

impl<S, P, Fut> Stream for TakeWhile<S, P, Fut>
where
    S: Stream,
    P: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(fut) = this.future.as_mut().as_pin_mut() {
                let keep = ready!(fut.poll(cx));
                this.future.set(None);
                let item = this.pending.take();
                if keep {
                    return Poll::Ready(item);
                }
                // The rejected element is dropped and never re-examined.
                *this.done = true;
                return Poll::Ready(None);
            }
            if *this.done {
                return Poll::Ready(None);
            }
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => {
                    this.future.set(Some((this.predicate)(&item)));
                    *this.pending = Some(item);
                }
                None => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
            }
        }
    }
}

impl<S, P, Fut> fmt::Debug for TakeWhile<S, P, Fut>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("stream", &self.stream)
            .field("pending", &self.pending)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::from_iter;
    use futures_lite::future::block_on;
    use futures_lite::prelude::*;

    #[test]
    fn stops_at_first_reject() {
        block_on(async {
            let mut s = take_while(from_iter([1, 2, 3, 4, 1]), |n| std::future::ready(*n < 3));
            assert_eq!(s.next().await, Some(1));
            assert_eq!(s.next().await, Some(2));
            assert_eq!(s.next().await, None);
            assert_eq!(s.next().await, None);
        })
    }

    #[test]
    fn never_polls_after_the_reject() {
        block_on(async {
            let mut pulled = 0;
            {
                let source = from_iter(std::iter::from_fn(|| {
                    pulled += 1;
                    Some(pulled)
                }));
                let mut s = take_while(source, |n| std::future::ready(*n < 3));
                assert_eq!(s.next().await, Some(1));
                assert_eq!(s.next().await, Some(2));
                assert_eq!(s.next().await, None);
                assert_eq!(s.next().await, None);
            }
            assert_eq!(pulled, 3);
        })
    }
}
