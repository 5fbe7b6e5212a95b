use core::pin::Pin;

/// Returns a pinned mutable reference to the element at `index`, or `None`
/// if the index is out of bounds.
pub(crate) fn get_pin_mut_vec<T>(vec: Pin<&mut Vec<T>>, index: usize) -> Option<Pin<&mut T>> {
    // SAFETY: `get_mut` never moves elements out of the vec, and the
    // reference comes from `vec` which is pinned. This has the same safety
    // as a normal field pin projection.
    unsafe {
        vec.get_unchecked_mut()
            .get_mut(index)
            .map(|t| Pin::new_unchecked(t))
    }
}
