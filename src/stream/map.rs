use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Applies a suspending transform to every element of a stream.
///
/// Mirrors [`iter::map`][crate::iter::map]: cardinality and order are
/// preserved, with one upstream pull per downstream request. The transform
/// may suspend before producing its result; at most one transform future is
/// in flight at a time.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let s = stream::map(stream::from_iter([1, 2]), |n| async move { n + 1 });
///     let mut s = std::pin::pin!(s);
///     assert_eq!(s.next().await, Some(2));
///     assert_eq!(s.next().await, Some(3));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn map<S, F, Fut>(source: S, f: F) -> Map<S, F, Fut>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future,
{
    Map {
        stream: source,
        f,
        future: None,
        done: false,
    }
}

/// A stream that applies a suspending transform to every element of the
/// underlying stream.
///
/// This `struct` is created by the [`map`] function. See its documentation
/// for more.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct Map<S, F, Fut> {
    #[pin]
    stream: S,
    f: F,
    #[pin]
    future: Option<Fut>,
    done: bool,
}

impl<S, F, Fut> Stream for Map<S, F, Fut>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(fut) = this.future.as_mut().as_pin_mut() {
                let item = ready!(fut.poll(cx));
                this.future.set(None);
                return Poll::Ready(Some(item));
            }
            if *this.done {
                return Poll::Ready(None);
            }
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => this.future.set(Some((this.f)(item))),
                None => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
            }
        }
    }
}
