//! Per-element variants of the record operations.
//!
//! Each function applies one record operation to every element of a sequence,
//! in order, and returns the same slice. The `*_with` forms compute the value
//! or patch per element from `(element, index)`; the plain forms clone one
//! fixed value or patch into every element.

use serde_json::Value;

use crate::ops::{augment_shallow, prune_shallow, transmute_deep, transmute_shallow};
use crate::path::{KeyPath, Seg};
use crate::{log_op_end, log_op_start};

/// Set `field` to a clone of `value` on every element.
pub fn augment_each(seq: &mut [Value], field: impl Into<Seg>, value: Value) -> &mut [Value] {
    let field = field.into();
    for item in seq.iter_mut() {
        augment_shallow(item, field.clone(), value.clone());
    }
    seq
}

/// Set `field` on every element to `produce(element, index)`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use transmute_core::ops::sequence_ops::augment_each_with;
///
/// let mut rows = vec![json!({"n": "a"}), json!({"n": "b"})];
/// augment_each_with(&mut rows, "pos", |_, index| json!(index));
/// assert_eq!(rows, vec![json!({"n": "a", "pos": 0}), json!({"n": "b", "pos": 1})]);
/// ```
pub fn augment_each_with<F>(seq: &mut [Value], field: impl Into<Seg>, mut produce: F) -> &mut [Value]
where
    F: FnMut(&Value, usize) -> Value,
{
    let field = field.into();
    for (index, item) in seq.iter_mut().enumerate() {
        let value = produce(item, index);
        augment_shallow(item, field.clone(), value);
    }
    seq
}

/// Remove `field` from every element.
pub fn prune_each(seq: &mut [Value], field: impl Into<Seg>) -> &mut [Value] {
    let field = field.into();
    for item in seq.iter_mut() {
        prune_shallow(item, field.clone());
    }
    seq
}

/// `transmute_shallow` on every element with a clone of `patch`.
pub fn transmute_shallow_each<'a>(
    seq: &'a mut [Value],
    fields_to_remove: &[Seg],
    patch: Value,
) -> &'a mut [Value] {
    transmute_shallow_each_with(seq, fields_to_remove, |_, _| patch.clone())
}

/// `transmute_shallow` on every element with `produce(element, index)` as its
/// patch.
pub fn transmute_shallow_each_with<'a, F>(
    seq: &'a mut [Value],
    fields_to_remove: &[Seg],
    mut produce: F,
) -> &'a mut [Value]
where
    F: FnMut(&Value, usize) -> Value,
{
    log_op_start!("transmute_shallow_each", seq_len = seq.len());
    let start = std::time::Instant::now();

    for (index, item) in seq.iter_mut().enumerate() {
        let patch = produce(item, index);
        transmute_shallow(item, fields_to_remove, patch);
    }

    log_op_end!(
        "transmute_shallow_each",
        duration_ms = start.elapsed().as_millis() as u64
    );
    seq
}

/// `transmute_deep` on every element with a clone of `patch`.
pub fn transmute_deep_each<'a>(
    seq: &'a mut [Value],
    removal_set: &[KeyPath],
    patch: Value,
) -> &'a mut [Value] {
    transmute_deep_each_with(seq, removal_set, |_, _| patch.clone())
}

/// `transmute_deep` on every element with `produce(element, index)` as its
/// patch. `produce` sees each element before it is transmuted.
pub fn transmute_deep_each_with<'a, F>(
    seq: &'a mut [Value],
    removal_set: &[KeyPath],
    mut produce: F,
) -> &'a mut [Value]
where
    F: FnMut(&Value, usize) -> Value,
{
    log_op_start!("transmute_deep_each", seq_len = seq.len());
    let start = std::time::Instant::now();

    for (index, item) in seq.iter_mut().enumerate() {
        let patch = produce(item, index);
        transmute_deep(item, removal_set, patch);
    }

    log_op_end!(
        "transmute_deep_each",
        duration_ms = start.elapsed().as_millis() as u64
    );
    seq
}
