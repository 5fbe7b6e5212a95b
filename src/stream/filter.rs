use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Keeps only the elements of a stream that satisfy a suspending predicate.
///
/// Mirrors [`iter::filter`][crate::iter::filter]: rejected elements are
/// discarded and the next upstream element is pulled automatically, so the
/// consumer always receives either a genuine next element or termination.
/// The predicate may suspend; while it is in flight the element under test
/// is parked and no other pull is issued.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::filter(stream::from_iter(1..=5), |n| {
///         std::future::ready(n % 2 == 1)
///     });
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(3));
///     assert_eq!(s.next().await, Some(5));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn filter<S, P, Fut>(source: S, predicate: P) -> Filter<S, P, Fut>
where
    S: Stream,
    P: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    Filter {
        stream: source,
        predicate,
        future: None,
        pending: None,
        done: false,
    }
}

/// A stream that keeps only the elements satisfying a suspending predicate.
///
/// This `struct` is created by the [`filter`] function. See its
/// documentation for more.
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct Filter<S: Stream, P, Fut> {
    #[pin]
    stream: S,
    predicate: P,
    #[pin]
    future: Option<Fut>,
    pending: Option<S::Item>,
    done: bool,
}

impl<S, P, Fut> Stream for Filter<S, P, Fut>
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
                continue;
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

impl<S, P, Fut> fmt::Debug for Filter<S, P, Fut>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
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
    fn rejects_are_skipped_transparently() {
        block_on(async {
            let mut s = filter(from_iter([1, 2, 3, 4]), |n| std::future::ready(n % 2 == 0));
            assert_eq!(s.next().await, Some(2));
            assert_eq!(s.next().await, Some(4));
            assert_eq!(s.next().await, None);
            assert_eq!(s.next().await, None);
        })
    }

    #[test]
    fn suspending_predicate() {
        block_on(async {
            let s = filter(from_iter(1..=4), |n| {
                let n = *n;
                async move {
                    futures_lite::future::yield_now().await;
                    n > 2
                }
            });
            let mut s = core::pin::pin!(s);
            assert_eq!(s.next().await, Some(3));
            assert_eq!(s.next().await, Some(4));
            assert_eq!(s.next().await, None);
        })
    }
}
