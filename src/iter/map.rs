/// Applies a transform to every element of a source.
///
/// The output has the same length and order as the input; one upstream
/// element is pulled per downstream request.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::map(["a", "bb", "ccc"], str::len).collect();
/// assert_eq!(out, [1, 2, 3]);
/// ```
pub fn map<I, F, B>(source: I, f: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    Map {
        iter: source.into_iter(),
        f,
        done: false,
    }
}

/// A sequence that applies a transform to every element of the underlying
/// source.
///
/// This `struct` is created by the [`map`] function. See its documentation
/// for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    f: F,
    done: bool,
}

impl<I, F, B> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) => Some((self.f)(item)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.iter.size_hint()
    }
}
