/// Drains a source, threading an accumulator through every element, and
/// returns the final accumulator.
///
/// This is the one eager operation in the family: it is a terminal
/// consumer, not a producer. On an empty source the initial accumulator is
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// assert_eq!(iter::reduce([1, 2, 3, 4], 0, |acc, n| acc + n), 10);
/// assert_eq!(iter::reduce(Vec::<i32>::new(), 42, |acc, n| acc + n), 42);
/// ```
pub fn reduce<I, A, F>(source: I, initial: A, mut f: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = initial;
    for item in source {
        acc = f(acc, item);
    }
    acc
}
