//! Deep delete, deep merge, and their composition.
//!
//! All three operations mutate the record they are given and hand back the
//! same `&mut` reference. None of them fail: unresolvable paths and shape
//! conflicts degrade to no-ops or to "patch wins" replacement.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::trace;

use crate::path::{self, KeyPath};
use crate::{log_op_end, log_op_start};

/// Remove the field at the end of each key-path, in order.
///
/// For each path the record is walked through every segment but the last. If
/// a step does not resolve (missing field, or a value that is not an object or
/// array) the path is abandoned silently. Otherwise the terminal field is
/// removed from the container reached; removing an array element leaves
/// `null` in its slot.
///
/// A path removed earlier in `removal_set` can make a later, longer path
/// unresolvable. That later path is then a no-op.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use transmute_core::{deep_delete, key_path};
///
/// let mut record = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// deep_delete(&mut record, &[key_path!("a", "b"), key_path!("x", "y")]);
/// assert_eq!(record, json!({"a": {"c": 2}, "d": 3}));
/// ```
pub fn deep_delete<'a>(record: &'a mut Value, removal_set: &[KeyPath]) -> &'a mut Value {
    for key_path in removal_set {
        let removed = delete_path(record, key_path);
        trace!(key_path = %key_path, removed, "deep delete");
    }
    record
}

fn delete_path(record: &mut Value, key_path: &KeyPath) -> bool {
    key_path
        .parents()
        .iter()
        .try_fold(record, |cursor, seg| path::child_mut(cursor, seg))
        .and_then(|parent| path::remove_child(parent, key_path.last()))
        .is_some()
}

/// Pending (target, patch) container pairs.
type Worklist<'a> = Vec<(&'a mut Value, Value)>;

/// Merge `patch` into `target`, recursively, in place.
///
/// For every own field of `patch` (object keys or array positions): when both
/// the patch value and the current target value are containers they are
/// merged field by field; otherwise the target slot is overwritten with the
/// patch value. Objects and arrays merge into each other too: an object key
/// addresses an array position when it is a canonical decimal index, and an
/// array position addresses the object entry named by its decimal rendering.
/// Keys that cannot address an array are skipped. Patch values are moved
/// into the target, never deep-copied. Array positions past the end of the
/// target are filled, padding any gap with `null`.
///
/// A patch that is not a container, or a target that is not one, leaves
/// `target` untouched.
///
/// Container pairs are scheduled on an explicit last-in-first-out worklist,
/// so nesting depth is bounded by heap rather than by the call stack. Each
/// pair's own fields are all written before any deeper pair is visited.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use transmute_core::deep_merge;
///
/// let mut record = json!({"a": {"b": 1, "c": 2}, "d": 1, "xs": [1, 2]});
/// deep_merge(&mut record, json!({"a": {"b": 9}, "d": {"e": true}, "xs": {"1": 7}}));
/// assert_eq!(record, json!({"a": {"b": 9, "c": 2}, "d": {"e": true}, "xs": [1, 7]}));
/// ```
pub fn deep_merge(target: &mut Value, patch: Value) -> &mut Value {
    merge_pairs(vec![(&mut *target, patch)]);
    target
}

fn merge_pairs(mut worklist: Worklist<'_>) {
    let mut pairs = 0usize;

    while let Some((target, patch)) = worklist.pop() {
        pairs += 1;
        // Only the root pair can fail this: nested pairs are scheduled when
        // both sides are already containers.
        if !path::is_container(target) || !path::is_container(&patch) {
            trace!(
                target_kind = path::kind_name(target),
                patch_kind = path::kind_name(&patch),
                "deep merge skipped: not a container pair"
            );
            continue;
        }
        merge_fields(target, patch, &mut worklist);
    }

    trace!(pairs, "deep merge");
}

fn merge_fields<'a>(target: &'a mut Value, patch: Value, worklist: &mut Worklist<'a>) {
    let mut nested = Vec::new();
    for (seg, value) in path::into_fields(patch) {
        let descend = path::is_container(&value)
            && path::child(target, &seg).is_some_and(path::is_container);
        if descend {
            nested.push((seg, value));
        } else {
            path::set_child(target, &seg, value);
        }
    }

    if nested.is_empty() {
        return;
    }
    match target {
        Value::Object(map) => {
            let mut nested: Map<String, Value> = nested
                .into_iter()
                .map(|(seg, value)| (seg.object_key().into_owned(), value))
                .collect();
            for (key, slot) in map.iter_mut() {
                if let Some(value) = nested.remove(key) {
                    worklist.push((slot, value));
                }
            }
        }
        Value::Array(items) => {
            let mut nested: BTreeMap<usize, Value> = nested
                .into_iter()
                .filter_map(|(seg, value)| Some((seg.array_index()?, value)))
                .collect();
            for (index, slot) in items.iter_mut().enumerate() {
                if let Some(value) = nested.remove(&index) {
                    worklist.push((slot, value));
                }
            }
        }
        _ => {}
    }
}

/// Deep delete followed by deep merge on the same record.
///
/// Removal always happens first, so a field removed by `removal_set` is
/// reintroduced when `patch` writes the same location. Returns `record`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use transmute_core::{key_path, transmute_deep};
///
/// let mut record = json!({"a": {"b": 1}});
/// transmute_deep(&mut record, &[key_path!("a", "b")], json!({"a": {"b": 2}}));
/// assert_eq!(record, json!({"a": {"b": 2}}));
/// ```
pub fn transmute_deep<'a>(
    record: &'a mut Value,
    removal_set: &[KeyPath],
    patch: Value,
) -> &'a mut Value {
    log_op_start!("transmute_deep", path_count = removal_set.len());
    let start = std::time::Instant::now();

    deep_delete(record, removal_set);
    deep_merge(record, patch);

    log_op_end!(
        "transmute_deep",
        duration_ms = start.elapsed().as_millis() as u64
    );
    record
}
