use std::fmt;

/// Maps every element of a source to a new source and concatenates the
/// results.
///
/// Equivalent to [`flatten`][crate::iter::flatten] over
/// [`map`][crate::iter::map], implemented in a single adapter so no
/// intermediate mapped sequence is constructed. Each produced source is
/// exhausted before the next upstream element is pulled.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::flat_map([1, 2, 3], |n| vec![n; n]).collect();
/// assert_eq!(out, [1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<I, F, J>(source: I, f: F) -> FlatMap<I::IntoIter, F, J>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    FlatMap {
        outer: source.into_iter(),
        f,
        inner: None,
        done: false,
    }
}

/// A sequence that maps each element to a source and concatenates the
/// results.
///
/// This `struct` is created by the [`flat_map`] function. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FlatMap<I, F, J: IntoIterator> {
    outer: I,
    f: F,
    inner: Option<J::IntoIter>,
    done: bool,
}

impl<I, F, J> Iterator for FlatMap<I, F, J>
where
    I: Iterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.next() {
                    Some(item) => return Some(item),
                    None => self.inner = None,
                }
            }
            match self.outer.next() {
                Some(item) => self.inner = Some((self.f)(item).into_iter()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

impl<I, F, J> fmt::Debug for FlatMap<I, F, J>
where
    I: fmt::Debug,
    J: IntoIterator,
    J::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output() {
        let seq = flat_map([1, 2], |n| vec![n]);
        assert!(format!("{:?}", seq).contains("FlatMap"));
    }

    #[test]
    fn concatenates_mapped_sources() {
        let out: Vec<_> = flat_map([10, 20], |n| [n, n + 1]).collect();
        assert_eq!(out, [10, 11, 20, 21]);
    }

    #[test]
    fn empty_results_are_skipped() {
        let out: Vec<_> = flat_map([0, 2, 0, 1], |n| vec![n; n]).collect();
        assert_eq!(out, [2, 2, 1]);
    }
}
