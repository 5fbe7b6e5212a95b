/// Yields elements while a predicate holds, then stops permanently.
///
/// The first rejected element is discarded: it is not yielded, and the
/// upstream source is never pulled again, even if later elements would have
/// satisfied the predicate.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::take_while([1, 2, 3, 4, 1], |n| *n < 3).collect();
/// assert_eq!(out, [1, 2]);
/// ```
pub fn take_while<I, P>(source: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile {
        iter: source.into_iter(),
        predicate,
        done: false,
    }
}

/// A sequence of the leading elements satisfying a predicate.
///
/// This `struct` is created by the [`take_while`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_first_reject() {
        let out: Vec<_> = take_while([1, 2, 3, 4, 1], |n| *n < 3).collect();
        assert_eq!(out, [1, 2]);
    }

    #[test]
    fn never_pulls_after_the_reject() {
        let mut pulled = 0;
        let source = std::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });
        let mut seq = take_while(source, |n| *n < 3);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        drop(seq);
        assert_eq!(pulled, 3);
    }
}
