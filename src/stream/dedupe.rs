use core::fmt;
use core::future::Future;
use core::hash::Hash;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use std::collections::HashSet;

use futures_core::Stream;
use pin_project::pin_project;

/// Drops elements whose key has been seen before within this invocation.
///
/// Mirrors [`iter::dedupe`][crate::iter::dedupe]: the suspending key
/// function derives an identity for each element; the first element
/// carrying a given key is yielded and later elements with the same key are
/// discarded, even if their payloads differ. Duplicates never surface
/// downstream; the next upstream element is pulled automatically. The
/// seen-key set is owned by the returned stream, grows monotonically for
/// its lifetime, and is released when the stream is dropped; separate
/// invocations never share state.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let records = [("1", "a"), ("2", "b"), ("1", "c")];
///     let mut s = stream::dedupe(stream::from_iter(records), |r| {
///         std::future::ready(r.0)
///     });
///     assert_eq!(s.next().await, Some(("1", "a")));
///     assert_eq!(s.next().await, Some(("2", "b")));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn dedupe<S, F, Fut, K>(source: S, get_key: F) -> Dedupe<S, F, Fut, K>
where
    S: Stream,
    F: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = K>,
    K: Hash + Eq,
{
    Dedupe {
        stream: source,
        get_key,
        seen: HashSet::new(),
        future: None,
        pending: None,
        done: false,
    }
}

/// A stream that keeps only the first element per derived key.
///
/// This `struct` is created by the [`dedupe`] function. See its
/// documentation for more.
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct Dedupe<S: Stream, F, Fut, K> {
    #[pin]
    stream: S,
    get_key: F,
    seen: HashSet<K>,
    #[pin]
    future: Option<Fut>,
    pending: Option<S::Item>,
    done: bool,
}

impl<S, F, Fut, K> Stream for Dedupe<S, F, Fut, K>
where
    S: Stream,
    F: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = K>,
    K: Hash + Eq,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(fut) = this.future.as_mut().as_pin_mut() {
                let key = ready!(fut.poll(cx));
                this.future.set(None);
                let item = this.pending.take();
                if this.seen.insert(key) {
                    return Poll::Ready(item);
                }
                continue;
            }
            if *this.done {
                return Poll::Ready(None);
            }
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => {
                    this.future.set(Some((this.get_key)(&item)));
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

impl<S, F, Fut, K> fmt::Debug for Dedupe<S, F, Fut, K>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dedupe")
            .field("stream", &self.stream)
            .field("seen", &self.seen)
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
    fn first_seen_wins() {
        block_on(async {
            let records = [("1", "a"), ("2", "b"), ("1", "c"), ("3", "d")];
            let mut s = dedupe(from_iter(records), |r| std::future::ready(r.0));
            assert_eq!(s.next().await, Some(("1", "a")));
            assert_eq!(s.next().await, Some(("2", "b")));
            assert_eq!(s.next().await, Some(("3", "d")));
            assert_eq!(s.next().await, None);
            assert_eq!(s.next().await, None);
        })
    }

    #[test]
    fn duplicates_never_surface_downstream() {
        block_on(async {
            let mut s = dedupe(from_iter([5, 5, 5, 6]), |n| std::future::ready(*n));
            assert_eq!(s.next().await, Some(5));
            assert_eq!(s.next().await, Some(6));
            assert_eq!(s.next().await, None);
        })
    }
}
