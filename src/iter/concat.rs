use std::fmt;
use std::vec;

/// Exhausts each source fully, in argument order, before moving to the
/// next.
///
/// Equivalent to [`flatten`][crate::iter::flatten] over a fixed list of
/// sources.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::concat(vec![vec![1], vec![2, 3]]).collect();
/// assert_eq!(out, [1, 2, 3]);
/// ```
pub fn concat<I>(sources: Vec<I>) -> Concat<I>
where
    I: IntoIterator,
{
    Concat {
        sources: sources.into_iter(),
        current: None,
        done: false,
    }
}

/// A sequence that chains multiple sources one after another.
///
/// This `struct` is created by the [`concat`] function. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Concat<I: IntoIterator> {
    sources: vec::IntoIter<I>,
    current: Option<I::IntoIter>,
    done: bool,
}

impl<I> Iterator for Concat<I>
where
    I: IntoIterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(current) = &mut self.current {
                match current.next() {
                    Some(item) => return Some(item),
                    None => self.current = None,
                }
            }
            match self.sources.next() {
                Some(source) => self.current = Some(source.into_iter()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

impl<I> fmt::Debug for Concat<I>
where
    I: IntoIterator + fmt::Debug,
    I::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concat")
            .field("sources", &self.sources)
            .field("current", &self.current)
            .field("done", &self.done)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output() {
        let seq = concat(vec![vec![1], vec![2]]);
        assert!(format!("{:?}", seq).contains("Concat"));
    }

    #[test]
    fn argument_order() {
        let out: Vec<_> = concat(vec![vec![1, 2], vec![3], vec![4]]).collect();
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn no_sources() {
        let mut seq = concat(Vec::<Vec<i32>>::new());
        assert_eq!(seq.next(), None);
    }
}
