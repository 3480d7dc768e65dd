//! Positional edits on fixed-length ordered sequences.
//!
//! Both operations splice in place: later elements shift by one position.

/// Insert `value` at `index`, shifting later elements right.
///
/// An index past the end appends. Returns `tuple`.
///
/// # Example
///
/// ```
/// use transmute_core::ops::augment_tuple;
///
/// let mut tuple = vec![1, 3];
/// augment_tuple(&mut tuple, 1, 2);
/// assert_eq!(tuple, [1, 2, 3]);
/// ```
pub fn augment_tuple<T>(tuple: &mut Vec<T>, index: usize, value: T) -> &mut Vec<T> {
    let at = index.min(tuple.len());
    tuple.insert(at, value);
    tuple
}

/// Remove the element at `index`, shifting later elements left.
///
/// An out-of-range index is a no-op. Returns `tuple`.
pub fn prune_tuple<T>(tuple: &mut Vec<T>, index: usize) -> &mut Vec<T> {
    if index < tuple.len() {
        tuple.remove(index);
    }
    tuple
}
