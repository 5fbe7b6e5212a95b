use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Transforms and filters a stream in a single pass.
///
/// Mirrors [`iter::filter_map`][crate::iter::filter_map]: the suspending
/// transform resolves to `Some(value)` to yield a mapped element or `None`
/// to drop it, in which case the next upstream element is pulled
/// automatically without surfacing anything downstream.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::filter_map(stream::from_iter(["3", "x", "7"]), |s| {
///         std::future::ready(s.parse::<i32>().ok())
///     });
///     assert_eq!(s.next().await, Some(3));
///     assert_eq!(s.next().await, Some(7));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn filter_map<S, F, Fut, B>(source: S, f: F) -> FilterMap<S, F, Fut>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Option<B>>,
{
    FilterMap {
        stream: source,
        f,
        future: None,
        done: false,
    }
}

/// A stream that transforms and filters elements in a single pass.
///
/// This `struct` is created by the [`filter_map`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct FilterMap<S, F, Fut> {
    #[pin]
    stream: S,
    f: F,
    #[pin]
    future: Option<Fut>,
    done: bool,
}

impl<S, F, Fut, B> Stream for FilterMap<S, F, Fut>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Option<B>>,
{
    type Item = B;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(fut) = this.future.as_mut().as_pin_mut() {
                let mapped = ready!(fut.poll(cx));
                this.future.set(None);
                if let Some(mapped) = mapped {
                    return Poll::Ready(Some(mapped));
                }
                continue;
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
