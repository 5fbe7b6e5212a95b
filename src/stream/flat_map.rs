use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Maps every element of a stream to a new stream and concatenates the
/// results.
///
/// Mirrors [`iter::flat_map`][crate::iter::flat_map]: equivalent to
/// [`flatten`][crate::stream::flatten] over [`map`][crate::stream::map]
/// in a single adapter, with no intermediate mapped stream. The transform
/// may suspend before producing each inner stream, and each inner stream is
/// exhausted before the next upstream element is pulled.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::flat_map(stream::from_iter([1, 2]), |n| {
///         std::future::ready(stream::from_iter([n, n * 10]))
///     });
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(10));
///     assert_eq!(s.next().await, Some(2));
///     assert_eq!(s.next().await, Some(20));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn flat_map<S, F, Fut, S2>(source: S, f: F) -> FlatMap<S, F, Fut, S2>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = S2>,
    S2: Stream,
{
    FlatMap {
        stream: source,
        f,
        future: None,
        inner: None,
        done: false,
    }
}

/// A stream that maps each element to a stream and concatenates the
/// results.
///
/// This `struct` is created by the [`flat_map`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct FlatMap<S, F, Fut, S2> {
    #[pin]
    stream: S,
    f: F,
    #[pin]
    future: Option<Fut>,
    #[pin]
    inner: Option<S2>,
    done: bool,
}

impl<S, F, Fut, S2> Stream for FlatMap<S, F, Fut, S2>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = S2>,
    S2: Stream,
{
    type Item = S2::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(inner) = this.inner.as_mut().as_pin_mut() {
                match ready!(inner.poll_next(cx)) {
                    Some(item) => return Poll::Ready(Some(item)),
                    None => this.inner.set(None),
                }
                continue;
            }
            if let Some(fut) = this.future.as_mut().as_pin_mut() {
                let source = ready!(fut.poll(cx));
                this.future.set(None);
                this.inner.set(Some(source));
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
