//! Single-level field edits on one record.

use serde_json::Value;

use crate::path::{self, Seg};

/// Set `field` on `record` to `value`, overwriting any previous value.
///
/// A no-op when `record` is not an object or array, or when `field` cannot
/// address an array. Returns `record`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use transmute_core::ops::augment_shallow;
///
/// let mut record = json!({"id": 1});
/// augment_shallow(&mut record, "active", json!(true));
/// assert_eq!(record, json!({"id": 1, "active": true}));
/// ```
pub fn augment_shallow(record: &mut Value, field: impl Into<Seg>, value: Value) -> &mut Value {
    path::set_child(record, &field.into(), value);
    record
}

/// Remove `field` from `record`. Missing fields are ignored. Returns `record`.
pub fn prune_shallow(record: &mut Value, field: impl Into<Seg>) -> &mut Value {
    path::remove_child(record, &field.into());
    record
}

/// Remove every field in `fields_to_remove`, then set every own field of
/// `patch` on `record`.
///
/// Patch fields replace whole values; nothing is merged below the top level.
/// A non-container patch adds nothing. Returns `record`.
pub fn transmute_shallow<'a>(
    record: &'a mut Value,
    fields_to_remove: &[Seg],
    patch: Value,
) -> &'a mut Value {
    for field in fields_to_remove {
        path::remove_child(record, field);
    }
    for (field, value) in path::into_fields(patch) {
        path::set_child(record, &field, value);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_augment_overwrites_existing_field() {
        let mut record = json!({"a": 1});
        augment_shallow(&mut record, "a", json!({"nested": true}));
        assert_eq!(record, json!({"a": {"nested": true}}));
    }

    #[test]
    fn test_augment_on_primitive_is_noop() {
        let mut record = json!(42);
        augment_shallow(&mut record, "a", json!(1));
        assert_eq!(record, json!(42));
    }

    #[test]
    fn test_prune_missing_field_is_noop() {
        let mut record = json!({"a": 1});
        prune_shallow(&mut record, "b");
        assert_eq!(record, json!({"a": 1}));
        prune_shallow(&mut record, "a");
        assert_eq!(record, json!({}));
    }

    #[test]
    fn test_transmute_shallow_replaces_without_merging() {
        let mut record = json!({"a": 1, "b": {"keep": 1}, "c": 3});
        transmute_shallow(
            &mut record,
            &[Seg::key("a"), Seg::key("c")],
            json!({"b": {"new": 2}, "d": 4}),
        );
        assert_eq!(record, json!({"b": {"new": 2}, "d": 4}));
    }

    #[test]
    fn test_transmute_shallow_removes_then_adds() {
        let mut record = json!({"a": 1});
        transmute_shallow(&mut record, &[Seg::key("a")], json!({"a": 2}));
        assert_eq!(record, json!({"a": 2}));
    }

    #[test]
    fn test_transmute_shallow_on_array_record() {
        let mut record = json!([1, 2, 3]);
        transmute_shallow(&mut record, &[Seg::index(0)], json!([9]));
        assert_eq!(record, json!([9, 2, 3]));
    }
}
