use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Drains a stream, threading an accumulator through every element, and
/// resolves to the final accumulator.
///
/// Mirrors [`iter::reduce`][crate::iter::reduce]: the one eager, terminal
/// operation, a future rather than a stream. Elements are consumed strictly one
/// at a time; the accumulator step may suspend, and no upstream pull is
/// issued while a step is in flight. On an empty stream the initial
/// accumulator is returned unchanged.
///
/// # Panics
///
/// The returned future panics if polled again after it has completed.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use pullkit::stream;
///
/// block_on(async {
///     let source = stream::from_iter([1, 2, 3, 4]);
///     let sum = stream::reduce(source, 0, |acc, n| async move { acc + n }).await;
///     assert_eq!(sum, 10);
/// })
/// ```
pub fn reduce<S, A, F, Fut>(source: S, initial: A, f: F) -> Reduce<S, A, F, Fut>
where
    S: Stream,
    F: FnMut(A, S::Item) -> Fut,
    Fut: Future<Output = A>,
{
    Reduce {
        stream: source,
        acc: Some(initial),
        f,
        future: None,
    }
}

/// A future resolving to the final accumulator of a drained stream.
///
/// This `struct` is created by the [`reduce`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Reduce<S, A, F, Fut> {
    #[pin]
    stream: S,
    acc: Option<A>,
    f: F,
    #[pin]
    future: Option<Fut>,
}

impl<S, A, F, Fut> Future for Reduce<S, A, F, Fut>
where
    S: Stream,
    F: FnMut(A, S::Item) -> Fut,
    Fut: Future<Output = A>,
{
    type Output = A;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            if let Some(fut) = this.future.as_mut().as_pin_mut() {
                let acc = ready!(fut.poll(cx));
                this.future.set(None);
                *this.acc = Some(acc);
            }
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => match this.acc.take() {
                    Some(acc) => this.future.set(Some((this.f)(acc, item))),
                    None => panic!("Reduce polled after completion"),
                },
                None => match this.acc.take() {
                    Some(acc) => return Poll::Ready(acc),
                    None => panic!("Reduce polled after completion"),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::from_iter;
    use futures_lite::future::block_on;

    #[test]
    fn folds_in_order() {
        block_on(async {
            let concatenated = reduce(
                from_iter(["a", "b", "c"]),
                String::new(),
                |mut acc, s| async move {
                    acc.push_str(s);
                    acc
                },
            )
            .await;
            assert_eq!(concatenated, "abc");
        })
    }

    #[test]
    fn identity_on_empty() {
        block_on(async {
            let out = reduce(from_iter(Vec::<i32>::new()), 42, |acc, n| {
                std::future::ready(acc + n)
            })
            .await;
            assert_eq!(out, 42);
        })
    }
}
