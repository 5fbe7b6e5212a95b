/// Keeps only the elements of a source that satisfy a predicate.
///
/// Rejected elements are discarded and the next upstream element is pulled
/// automatically, so the consumer always receives either a genuine next
/// element or termination. Relative order of surviving elements is
/// preserved.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::filter([1, 2, 3, 4], |n| n % 2 == 0).collect();
/// assert_eq!(out, [2, 4]);
/// ```
pub fn filter<I, P>(source: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        iter: source.into_iter(),
        predicate,
        done: false,
    }
}

/// A sequence that keeps only the elements satisfying a predicate.
///
/// This `struct` is created by the [`filter`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.iter.next() {
                Some(item) if (self.predicate)(&item) => return Some(item),
                Some(_) => continue,
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}
