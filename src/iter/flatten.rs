use std::fmt;

/// Concatenates a source of sources into a single sequence.
///
/// Each outer element is exhausted completely before the next outer element
/// is pulled, so the output is in outer-major order. Empty inner sources
/// contribute nothing and are skipped transparently.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::flatten([vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(out, [1, 2, 3]);
/// ```
pub fn flatten<I>(source: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Flatten {
        outer: source.into_iter(),
        inner: None,
        done: false,
    }
}

/// A sequence that concatenates the elements of a source of sources.
///
/// This `struct` is created by the [`flatten`] function. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    outer: I,
    inner: Option<<I::Item as IntoIterator>::IntoIter>,
    done: bool,
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

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
                Some(source) => self.inner = Some(source.into_iter()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

impl<I> fmt::Debug for Flatten<I>
where
    I: Iterator + fmt::Debug,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("done", &self.done)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output() {
        let seq = flatten([vec![1], vec![2]]);
        assert!(format!("{:?}", seq).contains("Flatten"));
    }

    #[test]
    fn outer_major_order() {
        let out: Vec<_> = flatten([vec![1, 2], vec![3], vec![4, 5]]).collect();
        assert_eq!(out, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn skips_empty_inners() {
        let out: Vec<i32> = flatten([vec![], vec![], vec![9]]).collect();
        assert_eq!(out, [9]);
    }

    #[test]
    fn empty_outer() {
        let out: Vec<i32> = flatten(Vec::<Vec<i32>>::new()).collect();
        assert!(out.is_empty());
    }
}
