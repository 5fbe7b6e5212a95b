use std::collections::HashSet;
use std::hash::Hash;

/// Drops elements whose key has been seen before within this invocation.
///
/// The key function derives an identity for each element; the first element
/// carrying a given key is yielded and later elements with the same key are
/// discarded, even if their payloads differ. Dropped elements never surface
/// downstream; the consumer always receives either a genuine next element
/// or termination. The seen-key set is owned by the returned sequence and
/// released when it is dropped; separate invocations never share state.
///
/// # Examples
///
/// ```rust
/// use pullkit::iter;
///
/// let out: Vec<_> = iter::dedupe(["ab", "cd", "ax", "ef"], |s| s.as_bytes()[0]).collect();
/// assert_eq!(out, ["ab", "cd", "ef"]);
/// ```
pub fn dedupe<I, F, K>(source: I, get_key: F) -> Dedupe<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    Dedupe {
        iter: source.into_iter(),
        get_key,
        seen: HashSet::new(),
        done: false,
    }
}

/// A sequence that keeps only the first element per derived key.
///
/// This `struct` is created by the [`dedupe`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Dedupe<I, F, K> {
    iter: I,
    get_key: F,
    seen: HashSet<K>,
    done: bool,
}

impl<I, F, K> Iterator for Dedupe<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.iter.next() {
                Some(item) => {
                    let key = (self.get_key)(&item);
                    if self.seen.insert(key) {
                        return Some(item);
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
