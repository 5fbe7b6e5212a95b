/// Transforms and filters a source in a single pass.
///
/// The transform returns `Some(value)` to yield a mapped element or `None`
/// to drop it; on `None` the next upstream element is pulled automatically.
/// Equivalent to fusing [`filter`][crate::iter::filter] and
/// [`map`][crate::iter::map] without the intermediate sequence.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<i32> = iter::filter_map(["3", "x", "7"], |s| s.parse().ok()).collect();
/// assert_eq!(out, [3, 7]);
/// ```
pub fn filter_map<I, F, B>(source: I, f: F) -> FilterMap<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    FilterMap {
        iter: source.into_iter(),
        f,
        done: false,
    }
}

/// A sequence that transforms and filters elements in a single pass.
///
/// This `struct` is created by the [`filter_map`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterMap<I, F> {
    iter: I,
    f: F,
    done: bool,
}

impl<I, F, B> Iterator for FilterMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.iter.next() {
                Some(item) => {
                    if let Some(mapped) = (self.f)(item) {
                        return Some(mapped);
                    }
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}
