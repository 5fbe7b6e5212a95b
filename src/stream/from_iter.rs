use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Promotes a sequential source into the suspending family.
///
/// Every poll of the returned stream resolves immediately with the next
/// element of the underlying iterator, in the same order. This is the only
/// conversion between the two families; going the other way would require
/// blocking on a suspended pull, which this library never does.
///
/// # Examples
///
/// ```rust
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use pullkit::stream;
///
/// block_on(async {
///     let mut s = stream::from_iter([1, 2]);
///     assert_eq!(s.next().await, Some(1));
///     assert_eq!(s.next().await, Some(2));
///     assert_eq!(s.next().await, None);
/// })
/// ```
pub fn from_iter<I>(source: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: source.into_iter(),
        done: false,
    }
}

/// A stream over the elements of a sequential source.
///
/// This `struct` is created by the [`from_iter`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
#[pin_project]
pub struct FromIter<I> {
    iter: I,
    done: bool,
}

impl<I> Stream for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        let item = this.iter.next();
        if item.is_none() {
            *this.done = true;
        }
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_lite::future::block_on;
    use futures_lite::prelude::*;

    #[test]
    fn fused_after_exhaustion() {
        block_on(async {
            // A chattering upstream yields again after reporting done; the
            // bridge must not resume through it.
            let mut n = 0;
            let source = std::iter::from_fn(|| {
                n += 1;
                if n == 1 {
                    None
                } else {
                    Some(n)
                }
            });
            let mut s = from_iter(source);
            assert_eq!(s.next().await, None);
            assert_eq!(s.next().await, None);
        })
    }

    #[test]
    fn same_elements_same_order() {
        block_on(async {
            let mut s = from_iter(vec!["a", "b", "c"]);
            assert_eq!(s.next().await, Some("a"));
            assert_eq!(s.next().await, Some("b"));
            assert_eq!(s.next().await, Some("c"));
            assert_eq!(s.next().await, None);
        })
    }
}
