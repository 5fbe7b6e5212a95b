use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Accumulates state across a stream, yielding every intermediate value.
///
/// Mirrors [`iter::scan`][crate::iter::scan]: the initial accumulator is
/// yielded first, unconditionally (even on an empty stream), followed by
/// one updated accumulator per upstream element, so the output is always
/// exactly one element longer than the input. The accumulator step may
/// suspend.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::scan(stream::from_iter([1, 2, 3]), 0, |acc, n| {
///         std::future::ready(acc + n)
///     });
///     assert_eq!(s.next().await, Some(0));
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(3));
///     assert_eq!(s.next().await, Some(6));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn scan<S, A, F, Fut>(source: S, initial: A, f: F) -> Scan<S, A, F, Fut>
where
    S: Stream,
    A: Clone,
    F: FnMut(A, S::Item) -> Fut,
    Fut: Future<Output = A>,
{
    Scan {
        stream: source,
        acc: Some(initial),
        f,
        future: None,
        started: false,
    }
}

/// A stream of the intermediate values of a running accumulation.
///
/// This `struct` is created by the [`scan`] function. See its documentation
/// for more.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct Scan<S, A, F, Fut> {
    #[pin]
    stream: S,
    acc: Option<A>,
    f: F,
    #[pin]
    future: Option<Fut>,
    started: bool,
}

impl<S, A, F, Fut> Stream for Scan<S, A, F, Fut>
where
    S: Stream,
    A: Clone,
    F: FnMut(A, S::Item) -> Fut,
    Fut: Future<Output = A>,
{
    type Item = A;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if !*this.started {
            *this.started = true;
            return Poll::Ready(this.acc.clone());
        }
        loop {
            if let Some(fut) = this.future.as_mut().as_pin_mut() {
                let acc = ready!(fut.poll(cx));
                this.future.set(None);
                *this.acc = Some(acc.clone());
                return Poll::Ready(Some(acc));
            }
            // The accumulator is gone once upstream has ended.
            if this.acc.is_none() {
                return Poll::Ready(None);
            }
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => {
                    if let Some(acc) = this.acc.take() {
                        this.future.set(Some((this.f)(acc, item)));
                    }
                }
                None => {
                    *this.acc = None;
                    return Poll::Ready(None);
                }
            }
        }
    }
}
