/// Yields at most `n` elements of a source, then stops.
///
/// The upstream source is never pulled past the n-th element; there is no
/// speculative pull to check whether upstream happens to be exhausted.
/// `take(source, 0)` yields nothing and never pulls upstream at all.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::take(1.., 3).collect();
/// assert_eq!(out, [1, 2, 3]);
/// ```
pub fn take<I>(source: I, n: usize) -> Take<I::IntoIter>
where
    I: IntoIterator,
{
    Take {
        iter: source.into_iter(),
        remaining: n,
    }
}

/// A sequence of at most the first `n` elements of the underlying source.
///
/// This `struct` is created by the [`take`] function. See its documentation
/// for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I> Iterator for Take<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let lower = lower.min(self.remaining);
        let upper = match upper {
            Some(n) => Some(n.min(self.remaining)),
            None => Some(self.remaining),
        };
        (lower, upper)
    }
}
