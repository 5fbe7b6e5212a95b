/// Accumulates state across a source, yielding every intermediate value.
///
/// The initial accumulator is yielded first, unconditionally (even when
/// the source is empty), followed by one updated accumulator per upstream
/// element. The output is therefore always exactly one element longer than
/// the input.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let sums: Vec<_> = iter::scan([1, 2, 3], 0, |acc, n| acc + n).collect();
/// assert_eq!(sums, [0, 1, 3, 6]);
/// ```
pub fn scan<I, A, F>(source: I, initial: A, f: F) -> Scan<I::IntoIter, A, F>
where
    I: IntoIterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
    Scan {
        iter: source.into_iter(),
        acc: Some(initial),
        f,
        started: false,
    }
}

/// A sequence of the intermediate values of a running accumulation.
///
/// This `struct` is created by the [`scan`] function. See its documentation
/// for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Scan<I, A, F> {
    iter: I,
    acc: Option<A>,
    f: F,
    started: bool,
}

impl<I, A, F> Iterator for Scan<I, A, F>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return self.acc.clone();
        }
        let acc = self.acc.take()?;
        match self.iter.next() {
            Some(item) => {
                let next = (self.f)(acc, item);
                self.acc = Some(next.clone());
                Some(next)
            }
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.acc.is_none() {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let extra = usize::from(!self.started);
        (lower.saturating_add(extra), upper.and_then(|n| n.checked_add(extra)))
    }
}
