use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Concatenates a stream of streams into a single stream.
///
/// Mirrors [`iter::flatten`][crate::iter::flatten]: each outer element is
/// exhausted completely before the next outer element is pulled, so the
/// output is in outer-major order and empty inner streams are skipped
/// transparently. At most one inner stream is held at a time.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let outer = stream::from_iter([vec![1, 2], vec![], vec![3]])
///         .map(stream::from_iter);
///     let mut s = stream::flatten(outer);
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(2));
///     assert_eq!(s.next().await, Some(3));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn flatten<S>(source: S) -> Flatten<S>
where
    S: Stream,
    S::Item: Stream,
{
    Flatten {
        outer: source,
        inner: None,
        done: false,
    }
}

/// A stream that concatenates the elements of a stream of streams.
///
/// This `struct` is created by the [`flatten`] function. See its
/// documentation for more.
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct Flatten<S: Stream> {
    #[pin]
    outer: S,
    #[pin]
    inner: Option<S::Item>,
    done: bool,
}

impl<S> Stream for Flatten<S>
where
    S: Stream,
    S::Item: Stream,
{
    type Item = <S::Item as Stream>::Item;

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
            if *this.done {
                return Poll::Ready(None);
            }
            match ready!(this.outer.as_mut().poll_next(cx)) {
                Some(source) => this.inner.set(Some(source)),
                None => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
            }
        }
    }
}

impl<S> fmt::Debug for Flatten<S>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("done", &self.done)
            .finish()
    }
}
